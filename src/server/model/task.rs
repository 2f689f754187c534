//! Domain models for tasks.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        api::CountDto,
        enums::{Priority, TaskStatus},
        task::{
            CreateTaskDto, PaginatedTasksDto, TaskDto, TaskQueryDto, TaskStatsDto, UpdateTaskDto,
        },
    },
    server::{
        error::internal::InternalError,
        model::{non_blank, optional_text, Page},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<i32>,
    pub created_by: i32,
    pub case_id: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_entity(entity: entity::task::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            status: entity.status.parse()?,
            priority: entity.priority.parse()?,
            due_date: entity.due_date,
            completed_at: entity.completed_at,
            assigned_to: entity.assigned_to,
            created_by: entity.created_by,
            case_id: entity.case_id,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            completed_at: self.completed_at,
            assigned_to: self.assigned_to,
            created_by: self.created_by,
            case_id: self.case_id,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Completion timestamp after a status change.
///
/// Entering `Completed` stamps `now` unless a timestamp is already present;
/// leaving `Completed` clears it.
pub fn completion_timestamp(
    next: TaskStatus,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match next {
        TaskStatus::Completed => Some(current.unwrap_or(now)),
        _ => None,
    }
}

/// Whether a task still needs doing and its due date has passed.
pub fn is_overdue(status: TaskStatus, due_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    !matches!(status, TaskStatus::Completed | TaskStatus::Cancelled)
        && due_date.is_some_and(|due| due < now)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TaskStats {
    pub total: u64,
    pub by_status: Vec<(TaskStatus, u64)>,
    pub overdue: u64,
}

impl TaskStats {
    pub fn into_dto(self) -> TaskStatsDto {
        TaskStatsDto {
            total: self.total,
            by_status: self
                .by_status
                .into_iter()
                .map(|(status, count)| CountDto {
                    key: status.to_string(),
                    count,
                })
                .collect(),
            overdue: self.overdue,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub assigned_to: Option<i32>,
    pub created_by: i32,
    pub case_id: Option<i32>,
    pub notes: Option<String>,
}

impl CreateTaskParams {
    /// # Arguments
    /// - `created_by` - Id of the authenticated member
    /// - `dto` - Request body
    /// - `now` - Completion time if the task is created already completed
    pub fn from_dto(
        created_by: i32,
        dto: CreateTaskDto,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        let title = non_blank(&dto.title).ok_or("Task title is required")?;
        let status = dto.status.unwrap_or(TaskStatus::Pending);

        Ok(Self {
            title,
            description: optional_text(dto.description),
            status,
            priority: dto.priority.unwrap_or(Priority::Medium),
            due_date: dto.due_date,
            completed_at: completion_timestamp(status, None, now),
            assigned_to: dto.assigned_to,
            created_by,
            case_id: dto.case_id,
            notes: optional_text(dto.notes),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub assigned_to: Option<i32>,
    pub case_id: Option<i32>,
    pub notes: Option<String>,
}

impl UpdateTaskParams {
    pub fn from_dto(id: i32, dto: UpdateTaskDto) -> Result<Self, String> {
        let title = match dto.title {
            Some(title) => Some(non_blank(&title).ok_or("Task title cannot be empty")?),
            None => None,
        };

        Ok(Self {
            id,
            title,
            description: dto.description,
            status: dto.status,
            priority: dto.priority,
            due_date: dto.due_date,
            assigned_to: dto.assigned_to,
            case_id: dto.case_id,
            notes: dto.notes,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assigned_to: Option<i32>,
    pub case_id: Option<i32>,
}

impl From<TaskQueryDto> for TaskFilter {
    fn from(query: TaskQueryDto) -> Self {
        Self {
            status: query.status,
            priority: query.priority,
            assigned_to: query.assigned_to,
            case_id: query.case_id,
        }
    }
}

impl Page<Task> {
    pub fn into_dto(self) -> PaginatedTasksDto {
        PaginatedTasksDto {
            tasks: self.items.into_iter().map(Task::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
