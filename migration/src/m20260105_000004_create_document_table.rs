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
                    .table(Document::Table)
                    .if_not_exists()
                    .col(pk_auto(Document::Id))
                    .col(integer(Document::CaseId))
                    .col(integer(Document::UploadedBy))
                    .col(string(Document::Title))
                    .col(text_null(Document::Description))
                    .col(string(Document::FilePath))
                    .col(string(Document::FileType))
                    .col(big_integer(Document::FileSize))
                    .col(string(Document::Category).default("other"))
                    .col(string(Document::Status).default("draft"))
                    .col(integer(Document::Version).default(1))
                    .col(timestamp(Document::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(Document::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_case_id")
                            .from(Document::Table, Document::CaseId)
                            .to(LegalCase::Table, LegalCase::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_document_uploaded_by")
                            .from(Document::Table, Document::UploadedBy)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_document_case_id")
                    .table(Document::Table)
                    .col(Document::CaseId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Document::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Document {
    Table,
    Id,
    CaseId,
    UploadedBy,
    Title,
    Description,
    FilePath,
    FileType,
    FileSize,
    Category,
    Status,
    Version,
    CreatedAt,
    UpdatedAt,
}
