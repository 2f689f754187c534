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
        legal_case::{
            CaseDetailsDto, CaseDto, CaseQueryDto, CaseStatsDto, CreateCaseDto,
            PaginatedCasesDto, UpdateCaseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::legal_case::{CaseFilter, CreateCaseParams, UpdateCaseParams},
        service::legal_case::CaseService,
        state::AppState,
    },
};

/// Tag for grouping case endpoints in OpenAPI documentation
pub static CASE_TAG: &str = "cases";

/// Open a new case.
///
/// The case receives the next `CASE-YYYYMM-NNNN` number of the current month. The
/// start date defaults to now.
///
/// # Returns
/// - `201 Created` - Created case
/// - `400 Bad Request` - Missing title, end before start, unknown client or assignee
/// - `401 Unauthorized` - Not logged in
/// - `503 Service Unavailable` - No case number could be allocated right now
#[utoipa::path(
    post,
    path = "/api/cases",
    tag = CASE_TAG,
    request_body = CreateCaseDto,
    responses(
        (status = 201, description = "Case created", body = CaseDto),
        (status = 400, description = "Invalid case data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Case number could not be allocated", body = ErrorDto)
    ),
)]
pub async fn create_case(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let now = Utc::now();
    let params = CreateCaseParams::from_dto(payload, now).map_err(AppError::BadRequest)?;

    let case = CaseService::new(&state.db).create(params, now).await?;

    Ok((StatusCode::CREATED, Json(case.into_dto())))
}

/// Get paginated cases, newest first, with client and assignee names.
#[utoipa::path(
    get,
    path = "/api/cases",
    tag = CASE_TAG,
    params(PaginationQuery, CaseQueryDto),
    responses(
        (status = 200, description = "Cases", body = PaginatedCasesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cases(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<CaseQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let cases = CaseService::new(&state.db)
        .get_paginated(
            &CaseFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(cases.into_dto())))
}

/// Case counts in total, per status and per priority.
#[utoipa::path(
    get,
    path = "/api/cases/stats",
    tag = CASE_TAG,
    responses(
        (status = 200, description = "Case statistics", body = CaseStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_case_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = CaseService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Get a case with its documents and tasks.
#[utoipa::path(
    get,
    path = "/api/cases/{id}",
    tag = CASE_TAG,
    params(("id" = i32, Path, description = "Case ID")),
    responses(
        (status = 200, description = "Case with documents and tasks", body = CaseDetailsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Case not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_case(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match CaseService::new(&state.db).get(id).await? {
        Some(details) => Ok((StatusCode::OK, Json(details.into_dto()))),
        None => Err(AppError::NotFound("Case not found".to_string())),
    }
}

/// Update a case. The case number never changes.
#[utoipa::path(
    put,
    path = "/api/cases/{id}",
    tag = CASE_TAG,
    params(("id" = i32, Path, description = "Case ID")),
    request_body = UpdateCaseDto,
    responses(
        (status = 200, description = "Updated case", body = CaseDto),
        (status = 400, description = "Invalid case data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Case not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_case(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCaseDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateCaseParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match CaseService::new(&state.db).update(params).await? {
        Some(case) => Ok((StatusCode::OK, Json(case.into_dto()))),
        None => Err(AppError::NotFound("Case not found".to_string())),
    }
}

/// Delete a case and its documents. Tasks of the case are kept without a case.
///
/// # Access Control
/// - `Admin` - Only admins can delete cases
#[utoipa::path(
    delete,
    path = "/api/cases/{id}",
    tag = CASE_TAG,
    params(("id" = i32, Path, description = "Case ID")),
    responses(
        (status = 204, description = "Case deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Case not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_case(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if CaseService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Case not found".to_string()))
    }
}
