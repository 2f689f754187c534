//! Domain models for legal cases.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::CountDto,
        enums::{CaseStatus, Priority},
        legal_case::{
            CaseDetailsDto, CaseDto, CaseQueryDto, CaseStatsDto, CreateCaseDto, PaginatedCasesDto,
            UpdateCaseDto,
        },
    },
    server::{
        error::internal::InternalError,
        model::{
            client::client_name, document::Document, non_blank, optional_text, task::Task,
            team_member::member_name, Page,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct LegalCase {
    pub id: i32,
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

impl LegalCase {
    /// Converts an entity model without joined names.
    pub fn from_entity(entity: entity::legal_case::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            case_number: entity.case_number,
            title: entity.title,
            description: entity.description,
            status: entity.status.parse()?,
            priority: entity.priority.parse()?,
            client_id: entity.client_id,
            client_name: None,
            assigned_to: entity.assigned_to,
            assignee_name: None,
            start_date: entity.start_date,
            end_date: entity.end_date,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts an entity model along with its joined client and assignee.
    pub fn from_joined(
        entity: entity::legal_case::Model,
        client: Option<&entity::client::Model>,
        assignee: Option<&entity::team_member::Model>,
    ) -> Result<Self, InternalError> {
        let mut case = Self::from_entity(entity)?;
        case.client_name = client.map(client_name);
        case.assignee_name = assignee.map(member_name);
        Ok(case)
    }

    pub fn into_dto(self) -> CaseDto {
        CaseDto {
            id: self.id,
            case_number: self.case_number,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            client_id: self.client_id,
            client_name: self.client_name,
            assigned_to: self.assigned_to,
            assignee_name: self.assignee_name,
            start_date: self.start_date,
            end_date: self.end_date,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A case with the documents filed under it and its tasks.
#[derive(Debug, Clone)]
pub struct CaseDetails {
    pub case: LegalCase,
    pub documents: Vec<Document>,
    pub tasks: Vec<Task>,
}

impl CaseDetails {
    pub fn into_dto(self) -> CaseDetailsDto {
        CaseDetailsDto {
            case: self.case.into_dto(),
            documents: self.documents.into_iter().map(Document::into_dto).collect(),
            tasks: self.tasks.into_iter().map(Task::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaseStats {
    pub total: u64,
    pub by_status: Vec<(CaseStatus, u64)>,
    pub by_priority: Vec<(Priority, u64)>,
}

impl CaseStats {
    pub fn into_dto(self) -> CaseStatsDto {
        CaseStatsDto {
            total: self.total,
            by_status: self
                .by_status
                .into_iter()
                .map(|(status, count)| CountDto {
                    key: status.to_string(),
                    count,
                })
                .collect(),
            by_priority: self
                .by_priority
                .into_iter()
                .map(|(priority, count)| CountDto {
                    key: priority.to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Input for a new case; the case number is allocated on insert.
#[derive(Debug, Clone)]
pub struct CreateCaseParams {
    pub title: String,
    pub description: Option<String>,
    pub status: CaseStatus,
    pub priority: Priority,
    pub client_id: Option<i32>,
    pub assigned_to: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl CreateCaseParams {
    /// # Arguments
    /// - `dto` - Request body
    /// - `now` - Start date used when the request omits one
    pub fn from_dto(dto: CreateCaseDto, now: DateTime<Utc>) -> Result<Self, String> {
        let title = non_blank(&dto.title).ok_or("Case title is required")?;
        let start_date = dto.start_date.unwrap_or(now);

        if dto.end_date.is_some_and(|end| end < start_date) {
            return Err("End date cannot be before start date".to_string());
        }

        Ok(Self {
            title,
            description: optional_text(dto.description),
            status: dto.status.unwrap_or(CaseStatus::Active),
            priority: dto.priority.unwrap_or(Priority::Medium),
            client_id: dto.client_id,
            assigned_to: dto.assigned_to,
            start_date,
            end_date: dto.end_date,
            notes: optional_text(dto.notes),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCaseParams {
    pub id: i32,
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

impl UpdateCaseParams {
    pub fn from_dto(id: i32, dto: UpdateCaseDto) -> Result<Self, String> {
        let title = match dto.title {
            Some(title) => Some(non_blank(&title).ok_or("Case title cannot be empty")?),
            None => None,
        };

        Ok(Self {
            id,
            title,
            description: dto.description,
            status: dto.status,
            priority: dto.priority,
            client_id: dto.client_id,
            assigned_to: dto.assigned_to,
            start_date: dto.start_date,
            end_date: dto.end_date,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaseFilter {
    pub status: Option<CaseStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<i32>,
    pub client_id: Option<i32>,
}

impl From<CaseQueryDto> for CaseFilter {
    fn from(query: CaseQueryDto) -> Self {
        Self {
            status: query.status,
            priority: query.priority,
            assigned_to: query.assigned_to,
            client_id: query.client_id,
        }
    }
}

impl Page<LegalCase> {
    pub fn into_dto(self) -> PaginatedCasesDto {
        PaginatedCasesDto {
            cases: self.items.into_iter().map(LegalCase::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
