use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::enums::{LeaveStatus, LeaveType};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct LeaveRequestDto {
    pub id: i32,
    pub team_member_id: i32,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Inclusive day count.
    pub duration_days: i32,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateLeaveRequestDto {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct ReviewLeaveRequestDto {
    pub decision: ReviewDecision,
    pub notes: Option<String>,
}

#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct LeaveQueryDto {
    /// Only honoured for admins; other members always see their own requests.
    pub team_member_id: Option<i32>,
    pub status: Option<LeaveStatus>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedLeaveRequestsDto {
    pub requests: Vec<LeaveRequestDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
