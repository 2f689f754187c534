//! Task factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    created_by: i32,
    title: String,
    status: String,
    priority: String,
    due_date: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    assigned_to: Option<i32>,
    case_id: Option<i32>,
}

impl<'a> TaskFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, created_by: i32) -> Self {
        Self {
            db,
            created_by,
            title: format!("Task {}", next_id()),
            status: "pending".to_string(),
            priority: "medium".to_string(),
            due_date: None,
            completed_at: None,
            assigned_to: None,
            case_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the status. A `completed` status also stamps `completed_at`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self.completed_at = (self.status == "completed").then(Utc::now);
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn assigned_to(mut self, member_id: i32) -> Self {
        self.assigned_to = Some(member_id);
        self
    }

    pub fn case_id(mut self, case_id: i32) -> Self {
        self.case_id = Some(case_id);
        self
    }

    /// Inserts the task.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            due_date: ActiveValue::Set(self.due_date),
            completed_at: ActiveValue::Set(self.completed_at),
            assigned_to: ActiveValue::Set(self.assigned_to),
            created_by: ActiveValue::Set(self.created_by),
            case_id: ActiveValue::Set(self.case_id),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending task created by the given member.
pub async fn create_task(
    db: &DatabaseConnection,
    created_by: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, created_by).build().await
}
