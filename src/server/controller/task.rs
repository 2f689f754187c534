use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        task::{
            CreateTaskDto, PaginatedTasksDto, TaskDto, TaskQueryDto, TaskStatsDto, UpdateTaskDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::task::{CreateTaskParams, TaskFilter, UpdateTaskParams},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "tasks";

/// Create a task. The current member is recorded as creator.
///
/// # Returns
/// - `201 Created` - Created task
/// - `400 Bad Request` - Missing title, unknown assignee or case
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params =
        CreateTaskParams::from_dto(member.id, payload, Utc::now()).map_err(AppError::BadRequest)?;

    let task = TaskService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get paginated tasks, soonest due first; tasks without a due date come last.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(PaginationQuery, TaskQueryDto),
    responses(
        (status = 200, description = "Tasks", body = PaginatedTasksDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<TaskQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db)
        .get_paginated(
            &TaskFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(tasks.into_dto())))
}

/// Task counts in total, per status, and open tasks past their due date.
#[utoipa::path(
    get,
    path = "/api/tasks/stats",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Task statistics", body = TaskStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = TaskService::new(&state.db).stats(Utc::now()).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task", body = TaskDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match TaskService::new(&state.db).get(id).await? {
        Some(task) => Ok((StatusCode::OK, Json(task.into_dto()))),
        None => Err(AppError::NotFound("Task not found".to_string())),
    }
}

/// Update a task.
///
/// Moving a task to `completed` stamps `completed_at` once; moving it to any other
/// status clears it.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Updated task", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateTaskParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match TaskService::new(&state.db).update(params, Utc::now()).await? {
        Some(task) => Ok((StatusCode::OK, Json(task.into_dto()))),
        None => Err(AppError::NotFound("Task not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{id}",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if TaskService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Task not found".to_string()))
    }
}
