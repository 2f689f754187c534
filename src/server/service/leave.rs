//! Leave requests: members manage their own, administrators review everyone's.

use sea_orm::DatabaseConnection;

use crate::{
    model::enums::LeaveStatus,
    server::{
        data::leave_request::LeaveRequestRepository,
        error::{auth::AuthError, AppError},
        model::{
            leave_request::{CreateLeaveRequestParams, LeaveFilter, LeaveRequest, ReviewLeaveParams},
            team_member::TeamMember,
            Page,
        },
    },
};

pub struct LeaveService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaveService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateLeaveRequestParams) -> Result<LeaveRequest, AppError> {
        let request = LeaveRequestRepository::new(self.db).create(params).await?;

        Ok(LeaveRequest::from_entity(request)?)
    }

    /// Requests visible to `actor`.
    ///
    /// Administrators see every request and may filter by member; anyone else only
    /// sees their own, whatever member filter they pass.
    pub async fn get_paginated(
        &self,
        actor: &TeamMember,
        mut filter: LeaveFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<LeaveRequest>, AppError> {
        if !actor.is_admin() {
            filter.team_member_id = Some(actor.id);
        }

        let (requests, total) = LeaveRequestRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        let requests = requests
            .into_iter()
            .map(LeaveRequest::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(requests, total, page, per_page))
    }

    /// # Returns
    /// - `Ok(Some(LeaveRequest))` - Request owned by `actor`, or any request for an admin
    /// - `Ok(None)` - No request with that id
    /// - `Err(AuthError::AccessDenied)` - Someone else's request
    pub async fn get(&self, actor: &TeamMember, id: i32) -> Result<Option<LeaveRequest>, AppError> {
        let Some(request) = self.find(id).await? else {
            return Ok(None);
        };

        if request.team_member_id != actor.id && !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("view leave request {}", id),
            )
            .into());
        }

        Ok(Some(request))
    }

    /// Approves or rejects a pending request.
    ///
    /// # Returns
    /// - `Ok(Some(LeaveRequest))` - Reviewed request
    /// - `Ok(None)` - No request with that id
    /// - `Err(AppError::BadRequest)` - Request is no longer pending
    pub async fn review(
        &self,
        params: ReviewLeaveParams,
    ) -> Result<Option<LeaveRequest>, AppError> {
        let id = params.id;
        let reviewer_id = params.reviewer_id;
        let status = params.status;

        let Some(request) = self.find(id).await? else {
            return Ok(None);
        };
        if request.status != LeaveStatus::Pending
            || !LeaveRequestRepository::new(self.db).review(params).await?
        {
            return Err(AppError::BadRequest(
                "Only pending requests can be reviewed".to_string(),
            ));
        }

        tracing::info!(
            "Leave request {} {} by team member {}",
            id,
            status,
            reviewer_id
        );

        self.find(id).await
    }

    /// Withdraws the actor's own pending request.
    ///
    /// # Returns
    /// - `Ok(Some(LeaveRequest))` - Cancelled request
    /// - `Ok(None)` - No request with that id
    /// - `Err(AuthError::AccessDenied)` - Someone else's request
    /// - `Err(AppError::BadRequest)` - Request is no longer pending
    pub async fn cancel(
        &self,
        actor: &TeamMember,
        id: i32,
    ) -> Result<Option<LeaveRequest>, AppError> {
        let Some(request) = self.find(id).await? else {
            return Ok(None);
        };

        if request.team_member_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("cancel leave request {}", id),
            )
            .into());
        }
        if request.status != LeaveStatus::Pending
            || !LeaveRequestRepository::new(self.db).cancel(id).await?
        {
            return Err(AppError::BadRequest(
                "Only pending requests can be cancelled".to_string(),
            ));
        }

        self.find(id).await
    }

    async fn find(&self, id: i32) -> Result<Option<LeaveRequest>, AppError> {
        LeaveRequestRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(LeaveRequest::from_entity)
            .transpose()
            .map_err(Into::into)
    }
}
