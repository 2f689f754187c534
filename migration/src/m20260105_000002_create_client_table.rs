use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_team_member_table::TeamMember;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(string(Client::ClientType))
                    .col(string_null(Client::FirstName))
                    .col(string_null(Client::LastName))
                    .col(string_null(Client::CompanyName))
                    .col(string_uniq(Client::Email))
                    .col(string_null(Client::Phone))
                    .col(text_null(Client::Address))
                    .col(string_null(Client::City))
                    .col(string_null(Client::State))
                    .col(string_null(Client::ZipCode))
                    .col(string_null(Client::Country))
                    .col(string_null(Client::TaxId))
                    .col(text_null(Client::Notes))
                    .col(string(Client::Status).default("active"))
                    .col(integer_null(Client::AssignedTo))
                    .col(timestamp(Client::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Client::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_assigned_to")
                            .from(Client::Table, Client::AssignedTo)
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
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    ClientType,
    FirstName,
    LastName,
    CompanyName,
    Email,
    Phone,
    Address,
    City,
    State,
    ZipCode,
    Country,
    TaxId,
    Notes,
    Status,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}
