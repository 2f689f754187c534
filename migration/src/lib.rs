pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_team_member_table;
mod m20260105_000002_create_client_table;
mod m20260105_000003_create_legal_case_table;
mod m20260105_000004_create_document_table;
mod m20260105_000005_create_task_table;
mod m20260105_000006_create_invoice_table;
mod m20260105_000007_create_invoice_item_table;
mod m20260105_000008_create_leave_request_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_team_member_table::Migration),
            Box::new(m20260105_000002_create_client_table::Migration),
            Box::new(m20260105_000003_create_legal_case_table::Migration),
            Box::new(m20260105_000004_create_document_table::Migration),
            Box::new(m20260105_000005_create_task_table::Migration),
            Box::new(m20260105_000006_create_invoice_table::Migration),
            Box::new(m20260105_000007_create_invoice_item_table::Migration),
            Box::new(m20260105_000008_create_leave_request_table::Migration),
        ]
    }
}
