use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::{
    api::CountDto,
    document::DocumentDto,
    enums::{CaseStatus, Priority},
    task::TaskDto,
};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CaseDto {
    pub id: i32,
    /// Allocated identifier, `CASE-YYYYMM-NNNN`.
    pub case_number: String,
    pub title: String,
    pub description: Option<String>,
    pub status: CaseStatus,
    pub priority: Priority,
    pub client_id: Option<i32>,
    pub client_name: Option<String>,
    pub assigned_to: Option<i32>,
    pub assignee_name: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A case with its documents and tasks.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CaseDetailsDto {
    #[serde(flatten)]
    pub case: CaseDto,
    pub documents: Vec<DocumentDto>,
    pub tasks: Vec<TaskDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateCaseDto {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub client_id: Option<i32>,
    pub assigned_to: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateCaseDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub client_id: Option<i32>,
    pub assigned_to: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct CaseQueryDto {
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<i32>,
    pub client_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedCasesDto {
    pub cases: Vec<CaseDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CaseStatsDto {
    pub total: u64,
    pub by_status: Vec<CountDto>,
    pub by_priority: Vec<CountDto>,
}
