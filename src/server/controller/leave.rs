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
        leave::{
            CreateLeaveRequestDto, LeaveQueryDto, LeaveRequestDto, PaginatedLeaveRequestsDto,
            ReviewLeaveRequestDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::leave_request::{CreateLeaveRequestParams, LeaveFilter, ReviewLeaveParams},
        service::leave::LeaveService,
        state::AppState,
    },
};

/// Tag for grouping leave endpoints in OpenAPI documentation
pub static LEAVE_TAG: &str = "leaves";

/// Request leave for the current member.
///
/// # Returns
/// - `201 Created` - Pending leave request
/// - `400 Bad Request` - End date before start date
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/leaves",
    tag = LEAVE_TAG,
    request_body = CreateLeaveRequestDto,
    responses(
        (status = 201, description = "Leave requested", body = LeaveRequestDto),
        (status = 400, description = "Invalid leave request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_leave_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateLeaveRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params =
        CreateLeaveRequestParams::from_dto(member.id, payload).map_err(AppError::BadRequest)?;

    let request = LeaveService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Get paginated leave requests, latest start date first.
///
/// Admins see every request and may filter by member; everyone else sees their own.
#[utoipa::path(
    get,
    path = "/api/leaves",
    tag = LEAVE_TAG,
    params(PaginationQuery, LeaveQueryDto),
    responses(
        (status = 200, description = "Leave requests", body = PaginatedLeaveRequestsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leave_requests(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<LeaveQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let requests = LeaveService::new(&state.db)
        .get_paginated(
            &member,
            LeaveFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(requests.into_dto())))
}

/// Get a leave request. Members can only view their own; admins can view any.
#[utoipa::path(
    get,
    path = "/api/leaves/{id}",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Leave request", body = LeaveRequestDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Request belongs to another member", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leave_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match LeaveService::new(&state.db).get(&member, id).await? {
        Some(request) => Ok((StatusCode::OK, Json(request.into_dto()))),
        None => Err(AppError::NotFound("Leave request not found".to_string())),
    }
}

/// Approve or reject a pending leave request.
///
/// # Access Control
/// - `Admin` - Only admins can review leave requests
///
/// # Returns
/// - `200 OK` - Reviewed request with reviewer and review time
/// - `400 Bad Request` - Request is no longer pending
/// - `404 Not Found` - No request with that id
#[utoipa::path(
    put,
    path = "/api/leaves/{id}/review",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave request ID")),
    request_body = ReviewLeaveRequestDto,
    responses(
        (status = 200, description = "Reviewed leave request", body = LeaveRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_leave_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<ReviewLeaveRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = ReviewLeaveParams::from_dto(id, admin.id, payload, Utc::now());

    match LeaveService::new(&state.db).review(params).await? {
        Some(request) => Ok((StatusCode::OK, Json(request.into_dto()))),
        None => Err(AppError::NotFound("Leave request not found".to_string())),
    }
}

/// Cancel the current member's own pending leave request.
#[utoipa::path(
    put,
    path = "/api/leaves/{id}/cancel",
    tag = LEAVE_TAG,
    params(("id" = i32, Path, description = "Leave request ID")),
    responses(
        (status = 200, description = "Cancelled leave request", body = LeaveRequestDto),
        (status = 400, description = "Request is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Request belongs to another member", body = ErrorDto),
        (status = 404, description = "Leave request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_leave_request(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match LeaveService::new(&state.db).cancel(&member, id).await? {
        Some(request) => Ok((StatusCode::OK, Json(request.into_dto()))),
        None => Err(AppError::NotFound("Leave request not found".to_string())),
    }
}
