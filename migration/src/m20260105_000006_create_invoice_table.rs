use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_team_member_table::TeamMember,
    m20260105_000002_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    // Unique index backs the retry-on-conflict numbering in the service layer
                    .col(string_uniq(Invoice::InvoiceNumber))
                    .col(integer(Invoice::ClientId))
                    .col(timestamp(Invoice::IssueDate))
                    .col(date(Invoice::DueDate))
                    .col(big_integer(Invoice::SubtotalCents).default(0))
                    .col(big_integer(Invoice::TaxCents).default(0))
                    .col(big_integer(Invoice::TotalCents).default(0))
                    .col(string(Invoice::Status).default("draft"))
                    .col(string_null(Invoice::PaymentMethod))
                    .col(timestamp_null(Invoice::PaidAt))
                    .col(text_null(Invoice::Notes))
                    .col(text_null(Invoice::Terms))
                    .col(integer(Invoice::CreatedBy))
                    .col(timestamp(Invoice::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Invoice::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_client_id")
                            .from(Invoice::Table, Invoice::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_created_by")
                            .from(Invoice::Table, Invoice::CreatedBy)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    InvoiceNumber,
    ClientId,
    IssueDate,
    DueDate,
    SubtotalCents,
    TaxCents,
    TotalCents,
    Status,
    PaymentMethod,
    PaidAt,
    Notes,
    Terms,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
