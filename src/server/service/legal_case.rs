//! Case management, including case-number allocation on creation.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::enums::{CaseStatus, Priority},
    server::{
        data::{
            client::ClientRepository,
            document::DocumentRepository,
            legal_case::{CaseSequenceStore, LegalCaseRepository},
            task::TaskRepository,
            team_member::TeamMemberRepository,
        },
        error::AppError,
        model::{
            document::Document,
            legal_case::{
                CaseDetails, CaseFilter, CaseStats, CreateCaseParams, LegalCase, UpdateCaseParams,
            },
            task::Task,
            Page,
        },
        service::numbering::SequenceAllocator,
    },
};

pub struct CaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a case under the next `CASE-YYYYMM-NNNN` number of the current month.
    ///
    /// # Arguments
    /// - `params` - Validated case fields
    /// - `now` - Creation time selecting the numbering period
    ///
    /// # Returns
    /// - `Ok(LegalCase)` - Created case with client and assignee names
    /// - `Err(AppError::BadRequest)` - Unknown client or assignee
    /// - `Err(AppError::AllocationErr)` - No case number could be allocated
    pub async fn create(
        &self,
        params: CreateCaseParams,
        now: DateTime<Utc>,
    ) -> Result<LegalCase, AppError> {
        self.ensure_references(params.client_id, params.assigned_to)
            .await?;

        let store = CaseSequenceStore::new(self.db, params);
        let case = SequenceAllocator::cases().allocate(&store, now).await?;

        tracing::info!("Created case {}", case.case_number);

        self.with_names(case).await
    }

    /// Cases matching `filter`, newest first, with client and assignee names.
    pub async fn get_paginated(
        &self,
        filter: &CaseFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<LegalCase>, AppError> {
        let (cases, total) = LegalCaseRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let clients = ClientRepository::new(self.db)
            .find_map(cases.iter().filter_map(|c| c.client_id))
            .await?;
        let members = TeamMemberRepository::new(self.db)
            .find_map(cases.iter().filter_map(|c| c.assigned_to))
            .await?;

        let cases = cases
            .into_iter()
            .map(|case| {
                let client = case.client_id.and_then(|id| clients.get(&id));
                let assignee = case.assigned_to.and_then(|id| members.get(&id));
                LegalCase::from_joined(case, client, assignee)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(cases, total, page, per_page))
    }

    /// A case with its documents and tasks.
    pub async fn get(&self, id: i32) -> Result<Option<CaseDetails>, AppError> {
        let Some(case) = LegalCaseRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        let documents = DocumentRepository::new(self.db).find_by_case(id).await?;
        let uploaders = TeamMemberRepository::new(self.db)
            .find_map(documents.iter().map(|d| d.uploaded_by))
            .await?;
        let documents = documents
            .into_iter()
            .map(|document| {
                let uploader = uploaders.get(&document.uploaded_by);
                Document::from_joined(document, Some(&case), uploader)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tasks = TaskRepository::new(self.db)
            .find_by_case(id)
            .await?
            .into_iter()
            .map(Task::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(CaseDetails {
            case: self.with_names(case).await?,
            documents,
            tasks,
        }))
    }

    /// # Returns
    /// - `Ok(Some(LegalCase))` - Updated case
    /// - `Ok(None)` - No case with that id
    /// - `Err(AppError::BadRequest)` - Unknown client or assignee, or end before start
    pub async fn update(&self, params: UpdateCaseParams) -> Result<Option<LegalCase>, AppError> {
        let repo = LegalCaseRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let start_date = params.start_date.unwrap_or(existing.start_date);
        let end_date = params.end_date.or(existing.end_date);
        if end_date.is_some_and(|end| end < start_date) {
            return Err(AppError::BadRequest(
                "End date cannot be before start date".to_string(),
            ));
        }

        self.ensure_references(params.client_id, params.assigned_to)
            .await?;

        match repo.update(params).await? {
            Some(case) => Ok(Some(self.with_names(case).await?)),
            None => Ok(None),
        }
    }

    /// Deletes a case together with its documents; its tasks are kept without a case.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(LegalCaseRepository::new(self.db).delete(id).await?)
    }

    pub async fn stats(&self) -> Result<CaseStats, AppError> {
        let repo = LegalCaseRepository::new(self.db);

        let by_status = repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| Ok((status.parse::<CaseStatus>()?, count.max(0) as u64)))
            .collect::<Result<Vec<_>, AppError>>()?;
        let by_priority = repo
            .count_by_priority()
            .await?
            .into_iter()
            .map(|(priority, count)| Ok((priority.parse::<Priority>()?, count.max(0) as u64)))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(CaseStats {
            total: repo.count().await?,
            by_status,
            by_priority,
        })
    }

    async fn with_names(&self, case: entity::legal_case::Model) -> Result<LegalCase, AppError> {
        let client = match case.client_id {
            Some(id) => ClientRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };
        let assignee = match case.assigned_to {
            Some(id) => TeamMemberRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        Ok(LegalCase::from_joined(case, client.as_ref(), assignee.as_ref())?)
    }

    async fn ensure_references(
        &self,
        client_id: Option<i32>,
        assigned_to: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(client_id) = client_id {
            if !ClientRepository::new(self.db).exists(client_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Client {} does not exist",
                    client_id
                )));
            }
        }
        if let Some(member_id) = assigned_to {
            if TeamMemberRepository::new(self.db)
                .find_by_id(member_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Team member {} does not exist",
                    member_id
                )));
            }
        }

        Ok(())
    }
}
