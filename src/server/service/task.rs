use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::enums::TaskStatus,
    server::{
        data::{
            legal_case::LegalCaseRepository, task::TaskRepository,
            team_member::TeamMemberRepository,
        },
        error::AppError,
        model::{
            task::{CreateTaskParams, Task, TaskFilter, TaskStats, UpdateTaskParams},
            Page,
        },
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Task)` - Created task
    /// - `Err(AppError::BadRequest)` - Unknown assignee or case
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        self.ensure_references(params.assigned_to, params.case_id)
            .await?;

        let task = TaskRepository::new(self.db).create(params).await?;

        Ok(Task::from_entity(task)?)
    }

    /// Tasks matching `filter`, soonest due first with undated tasks last.
    pub async fn get_paginated(
        &self,
        filter: &TaskFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Task>, AppError> {
        let (tasks, total) = TaskRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let tasks = tasks
            .into_iter()
            .map(Task::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(tasks, total, page, per_page))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Task>, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Task::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// # Arguments
    /// - `params` - Fields to change
    /// - `now` - Completion time if the task moves to `completed`
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task
    /// - `Ok(None)` - No task with that id
    /// - `Err(AppError::BadRequest)` - Unknown assignee or case
    pub async fn update(
        &self,
        params: UpdateTaskParams,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>, AppError> {
        self.ensure_references(params.assigned_to, params.case_id)
            .await?;

        TaskRepository::new(self.db)
            .update(params, now)
            .await?
            .map(Task::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TaskRepository::new(self.db).delete(id).await?)
    }

    /// Totals per status and the number of open tasks past their due date at `now`.
    pub async fn stats(&self, now: DateTime<Utc>) -> Result<TaskStats, AppError> {
        let repo = TaskRepository::new(self.db);

        let by_status = repo
            .count_by_status()
            .await?
            .into_iter()
            .map(|(status, count)| Ok((status.parse::<TaskStatus>()?, count.max(0) as u64)))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(TaskStats {
            total: repo.count().await?,
            by_status,
            overdue: repo.count_overdue(now).await?,
        })
    }

    async fn ensure_references(
        &self,
        assigned_to: Option<i32>,
        case_id: Option<i32>,
    ) -> Result<(), AppError> {
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
        if let Some(case_id) = case_id {
            if !LegalCaseRepository::new(self.db).exists(case_id).await? {
                return Err(AppError::BadRequest(format!(
                    "Case {} does not exist",
                    case_id
                )));
            }
        }

        Ok(())
    }
}
