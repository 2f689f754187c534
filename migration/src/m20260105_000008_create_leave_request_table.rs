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
                    .table(LeaveRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaveRequest::Id))
                    .col(integer(LeaveRequest::TeamMemberId))
                    .col(string(LeaveRequest::LeaveType))
                    .col(date(LeaveRequest::StartDate))
                    .col(date(LeaveRequest::EndDate))
                    .col(integer(LeaveRequest::DurationDays))
                    .col(text_null(LeaveRequest::Reason))
                    .col(string(LeaveRequest::Status).default("pending"))
                    .col(integer_null(LeaveRequest::ReviewedBy))
                    .col(timestamp_null(LeaveRequest::ReviewedAt))
                    .col(text_null(LeaveRequest::ReviewNotes))
                    .col(timestamp(LeaveRequest::CreatedAt).default(Expr::current_timestamp()))
                    .col(timestamp(LeaveRequest::UpdatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_request_team_member_id")
                            .from(LeaveRequest::Table, LeaveRequest::TeamMemberId)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_request_reviewed_by")
                            .from(LeaveRequest::Table, LeaveRequest::ReviewedBy)
                            .to(TeamMember::Table, TeamMember::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_request_team_member_id")
                    .table(LeaveRequest::Table)
                    .col(LeaveRequest::TeamMemberId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_request_status")
                    .table(LeaveRequest::Table)
                    .col(LeaveRequest::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeaveRequest {
    Table,
    Id,
    TeamMemberId,
    LeaveType,
    StartDate,
    EndDate,
    DurationDays,
    Reason,
    Status,
    ReviewedBy,
    ReviewedAt,
    ReviewNotes,
    CreatedAt,
    UpdatedAt,
}
