//! Leave request repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::{
    model::enums::LeaveStatus,
    server::model::leave_request::{CreateLeaveRequestParams, LeaveFilter, ReviewLeaveParams},
};

pub struct LeaveRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending request.
    pub async fn create(
        &self,
        params: CreateLeaveRequestParams,
    ) -> Result<entity::leave_request::Model, DbErr> {
        let now = Utc::now();

        entity::leave_request::ActiveModel {
            team_member_id: ActiveValue::Set(params.team_member_id),
            leave_type: ActiveValue::Set(params.leave_type.as_str().to_string()),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            duration_days: ActiveValue::Set(params.duration_days),
            reason: ActiveValue::Set(params.reason),
            status: ActiveValue::Set(LeaveStatus::Pending.as_str().to_string()),
            reviewed_by: ActiveValue::Set(None),
            reviewed_at: ActiveValue::Set(None),
            review_notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::leave_request::Model>, DbErr> {
        entity::prelude::LeaveRequest::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets requests matching `filter`, most recent start date first.
    ///
    /// # Returns
    /// - `Ok((requests, total))` - Page of requests and the number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &LeaveFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::leave_request::Model>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::leave_request::Column::StartDate)
            .order_by_desc(entity::leave_request::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let requests = paginator.fetch_page(page).await?;

        Ok((requests, total))
    }

    fn filtered(filter: &LeaveFilter) -> Select<entity::prelude::LeaveRequest> {
        let mut query = entity::prelude::LeaveRequest::find();

        if let Some(member_id) = filter.team_member_id {
            query = query.filter(entity::leave_request::Column::TeamMemberId.eq(member_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::leave_request::Column::Status.eq(status.as_str()));
        }

        query
    }

    /// Records a review decision on a request that is still pending.
    ///
    /// # Returns
    /// - `Ok(true)` - Request reviewed
    /// - `Ok(false)` - No pending request with that id
    /// - `Err(DbErr)` - Database error
    pub async fn review(&self, params: ReviewLeaveParams) -> Result<bool, DbErr> {
        let result = entity::prelude::LeaveRequest::update_many()
            .filter(entity::leave_request::Column::Id.eq(params.id))
            .filter(entity::leave_request::Column::Status.eq(LeaveStatus::Pending.as_str()))
            .col_expr(
                entity::leave_request::Column::Status,
                sea_orm::sea_query::Expr::value(params.status.as_str()),
            )
            .col_expr(
                entity::leave_request::Column::ReviewedBy,
                sea_orm::sea_query::Expr::value(params.reviewer_id),
            )
            .col_expr(
                entity::leave_request::Column::ReviewedAt,
                sea_orm::sea_query::Expr::value(params.reviewed_at),
            )
            .col_expr(
                entity::leave_request::Column::ReviewNotes,
                sea_orm::sea_query::Expr::value(params.notes),
            )
            .col_expr(
                entity::leave_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(params.reviewed_at),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Cancels a request that is still pending.
    ///
    /// # Returns
    /// - `Ok(true)` - Request cancelled
    /// - `Ok(false)` - No pending request with that id
    /// - `Err(DbErr)` - Database error
    pub async fn cancel(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LeaveRequest::update_many()
            .filter(entity::leave_request::Column::Id.eq(id))
            .filter(entity::leave_request::Column::Status.eq(LeaveStatus::Pending.as_str()))
            .col_expr(
                entity::leave_request::Column::Status,
                sea_orm::sea_query::Expr::value(LeaveStatus::Cancelled.as_str()),
            )
            .col_expr(
                entity::leave_request::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
