use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_team_member_table::TeamMember,
    m20260105_000003_create_legal_case_table::LegalCase,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Task::Table)
                    .if_not_exists()
                    .col(pk_auto(Task::Id))
                    .col(string(Task::Title))
                    .col(text_null(Task::Description))
                    .col(string(Task::Status).default("pending"))
                    .col(string(Task::Priority).default("medium"))
                    .col(timestamp_null(Task::DueDate))
                    .col(timestamp_null(Task::CompletedAt))
                    .col(integer_null(Task::AssignedTo))
                    .col(integer(Task::CreatedBy))
                    .col(integer_null(Task::CaseId))
                    .col(text_null(Task::Notes))
                    .col(timestamp(Task::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Task::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_assigned_to")
                            .from(Task::Table, Task::AssignedTo)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_created_by")
                            .from(Task::Table, Task::CreatedBy)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_case_id")
                            .from(Task::Table, Task::CaseId)
                            .to(LegalCase::Table, LegalCase::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Task::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Task {
    Table,
    Id,
    Title,
    Description,
    Status,
    Priority,
    DueDate,
    CompletedAt,
    AssignedTo,
    CreatedBy,
    CaseId,
    Notes,
    CreatedAt,
    UpdatedAt,
}
