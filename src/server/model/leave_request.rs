//! Domain models for leave requests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        enums::{LeaveStatus, LeaveType},
        leave::{
            CreateLeaveRequestDto, LeaveQueryDto, LeaveRequestDto, PaginatedLeaveRequestsDto,
            ReviewDecision, ReviewLeaveRequestDto,
        },
    },
    server::{
        error::internal::InternalError,
        model::{optional_text, Page},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequest {
    pub id: i32,
    pub team_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i32,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn from_entity(entity: entity::leave_request::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            team_member_id: entity.team_member_id,
            leave_type: entity.leave_type.parse()?,
            start_date: entity.start_date,
            end_date: entity.end_date,
            duration_days: entity.duration_days,
            reason: entity.reason,
            status: entity.status.parse()?,
            reviewed_by: entity.reviewed_by,
            reviewed_at: entity.reviewed_at,
            review_notes: entity.review_notes,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> LeaveRequestDto {
        LeaveRequestDto {
            id: self.id,
            team_member_id: self.team_member_id,
            leave_type: self.leave_type,
            start_date: self.start_date,
            end_date: self.end_date,
            duration_days: self.duration_days,
            reason: self.reason,
            status: self.status,
            reviewed_by: self.reviewed_by,
            reviewed_at: self.reviewed_at,
            review_notes: self.review_notes,
            created_at: self.created_at,
        }
    }
}

/// Number of calendar days from `start` to `end`, both included.
///
/// Returns `None` when `end` is before `start`.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> Option<i32> {
    let days = (end - start).num_days();
    (days >= 0).then(|| i32::try_from(days + 1).ok()).flatten()
}

#[derive(Debug, Clone)]
pub struct CreateLeaveRequestParams {
    pub team_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i32,
    pub reason: Option<String>,
}

impl CreateLeaveRequestParams {
    pub fn from_dto(team_member_id: i32, dto: CreateLeaveRequestDto) -> Result<Self, String> {
        let duration_days = inclusive_days(dto.start_date, dto.end_date)
            .ok_or("End date cannot be before start date")?;

        Ok(Self {
            team_member_id,
            leave_type: dto.leave_type,
            start_date: dto.start_date,
            end_date: dto.end_date,
            duration_days,
            reason: optional_text(dto.reason),
        })
    }
}

/// Outcome of an administrator reviewing a pending request.
#[derive(Debug, Clone)]
pub struct ReviewLeaveParams {
    pub id: i32,
    pub reviewer_id: i32,
    pub status: LeaveStatus,
    pub notes: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}

impl ReviewLeaveParams {
    pub fn from_dto(
        id: i32,
        reviewer_id: i32,
        dto: ReviewLeaveRequestDto,
        now: DateTime<Utc>,
    ) -> Self {
        let status = match dto.decision {
            ReviewDecision::Approve => LeaveStatus::Approved,
            ReviewDecision::Reject => LeaveStatus::Rejected,
        };

        Self {
            id,
            reviewer_id,
            status,
            notes: optional_text(dto.notes),
            reviewed_at: now,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LeaveFilter {
    pub team_member_id: Option<i32>,
    pub status: Option<LeaveStatus>,
}

impl From<LeaveQueryDto> for LeaveFilter {
    fn from(query: LeaveQueryDto) -> Self {
        Self {
            team_member_id: query.team_member_id,
            status: query.status,
        }
    }
}

impl Page<LeaveRequest> {
    pub fn into_dto(self) -> PaginatedLeaveRequestsDto {
        PaginatedLeaveRequestsDto {
            requests: self.items.into_iter().map(LeaveRequest::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
