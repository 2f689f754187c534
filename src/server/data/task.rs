//! Task repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::NullOrdering, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::enums::TaskStatus,
    server::model::task::{completion_timestamp, CreateTaskParams, TaskFilter, UpdateTaskParams},
};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTaskParams) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();

        entity::task::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            due_date: ActiveValue::Set(params.due_date),
            completed_at: ActiveValue::Set(params.completed_at),
            assigned_to: ActiveValue::Set(params.assigned_to),
            created_by: ActiveValue::Set(params.created_by),
            case_id: ActiveValue::Set(params.case_id),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id).one(self.db).await
    }

    /// Tasks linked to a case, soonest due first.
    pub async fn find_by_case(&self, case_id: i32) -> Result<Vec<entity::task::Model>, DbErr> {
        Self::by_due_date(
            entity::prelude::Task::find().filter(entity::task::Column::CaseId.eq(case_id)),
        )
        .all(self.db)
        .await
    }

    /// Gets tasks matching `filter`, soonest due first and undated tasks last.
    ///
    /// # Returns
    /// - `Ok((tasks, total))` - Page of tasks and the number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &TaskFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::task::Model>, u64), DbErr> {
        let paginator = Self::by_due_date(Self::filtered(filter)).paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tasks = paginator.fetch_page(page).await?;

        Ok((tasks, total))
    }

    fn filtered(filter: &TaskFilter) -> Select<entity::prelude::Task> {
        let mut query = entity::prelude::Task::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::task::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::task::Column::Priority.eq(priority.as_str()));
        }
        if let Some(assigned_to) = filter.assigned_to {
            query = query.filter(entity::task::Column::AssignedTo.eq(assigned_to));
        }
        if let Some(case_id) = filter.case_id {
            query = query.filter(entity::task::Column::CaseId.eq(case_id));
        }

        query
    }

    fn by_due_date(query: Select<entity::prelude::Task>) -> Select<entity::prelude::Task> {
        query
            .order_by_with_nulls(entity::task::Column::DueDate, Order::Asc, NullOrdering::Last)
            .order_by_asc(entity::task::Column::Id)
    }

    /// Applies the provided fields, maintaining `completed_at` on status changes.
    ///
    /// # Arguments
    /// - `params` - Fields to change
    /// - `now` - Completion time when the task moves to `completed`
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated task
    /// - `Ok(None)` - No task with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateTaskParams,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::task::Model>, DbErr> {
        let Some(task) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let completed_at = task.completed_at;
        let mut active: entity::task::ActiveModel = task.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
            active.completed_at = ActiveValue::Set(completion_timestamp(status, completed_at, now));
        }
        if let Some(priority) = params.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(due_date) = params.due_date {
            active.due_date = ActiveValue::Set(Some(due_date));
        }
        if let Some(assigned_to) = params.assigned_to {
            active.assigned_to = ActiveValue::Set(Some(assigned_to));
        }
        if let Some(case_id) = params.case_id {
            active.case_id = ActiveValue::Set(Some(case_id));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Task::find().count(self.db).await
    }

    /// Number of tasks per stored status value.
    pub async fn count_by_status(&self) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::Task::find()
            .select_only()
            .column(entity::task::Column::Status)
            .column_as(entity::task::Column::Id.count(), "count")
            .group_by(entity::task::Column::Status)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }

    /// Open tasks whose due date is before `now`.
    pub async fn count_overdue(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        entity::prelude::Task::find()
            .filter(entity::task::Column::Status.is_not_in([
                TaskStatus::Completed.as_str(),
                TaskStatus::Cancelled.as_str(),
            ]))
            .filter(entity::task::Column::DueDate.lt(now))
            .count(self.db)
            .await
    }
}
