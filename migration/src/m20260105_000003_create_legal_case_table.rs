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
                    .table(LegalCase::Table)
                    .if_not_exists()
                    .col(pk_auto(LegalCase::Id))
                    .col(string_uniq(LegalCase::CaseNumber))
                    .col(string(LegalCase::Title))
                    .col(text_null(LegalCase::Description))
                    .col(string(LegalCase::Status).default("active"))
                    .col(string(LegalCase::Priority).default("medium"))
                    .col(integer_null(LegalCase::ClientId))
                    .col(integer_null(LegalCase::AssignedTo))
                    .col(timestamp(LegalCase::StartDate))
                    .col(timestamp_null(LegalCase::EndDate))
                    .col(text_null(LegalCase::Notes))
                    .col(timestamp(LegalCase::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(LegalCase::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legal_case_client_id")
                            .from(LegalCase::Table, LegalCase::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_legal_case_assigned_to")
                            .from(LegalCase::Table, LegalCase::AssignedTo)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LegalCase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LegalCase {
    Table,
    Id,
    CaseNumber,
    Title,
    Description,
    Status,
    Priority,
    ClientId,
    AssignedTo,
    StartDate,
    EndDate,
    Notes,
    CreatedAt,
    UpdatedAt,
}
