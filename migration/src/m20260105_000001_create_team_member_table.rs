use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(string(TeamMember::FirstName))
                    .col(string(TeamMember::LastName))
                    .col(string_uniq(TeamMember::Email))
                    .col(string(TeamMember::PasswordHash))
                    .col(string(TeamMember::Role).default("assistant"))
                    .col(string_null(TeamMember::Department))
                    .col(string_null(TeamMember::Phone))
                    .col(timestamp_null(TeamMember::LastLoginAt))
                    .col(timestamp(TeamMember::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(TeamMember::UpdatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PasswordHash,
    Role,
    Department,
    Phone,
    LastLoginAt,
    CreatedAt,
    UpdatedAt,
}
