use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        team::{PaginatedTeamMembersDto, TeamMemberDto, UpdateTeamMemberDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::team_member::UpdateTeamMemberParams,
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "team";

/// Get paginated team members, ordered by name.
///
/// # Access Control
/// - Any logged-in team member
#[utoipa::path(
    get,
    path = "/api/team",
    tag = TEAM_TAG,
    params(PaginationQuery),
    responses(
        (status = 200, description = "Team members", body = PaginatedTeamMembersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_members(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let members = TeamService::new(&state.db)
        .get_paginated(pagination.page, pagination.per_page())
        .await?;

    Ok((StatusCode::OK, Json(members.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 200, description = "Team member", body = TeamMemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match TeamService::new(&state.db).get(id).await? {
        Some(member) => Ok((StatusCode::OK, Json(member.into_dto()))),
        None => Err(AppError::NotFound("Team member not found".to_string())),
    }
}

/// Update a team member's profile, role or password.
///
/// # Access Control
/// - `Admin` - Only admins can edit team members
///
/// # Returns
/// - `200 OK` - Updated team member
/// - `400 Bad Request` - Invalid fields or email already in use
/// - `404 Not Found` - No team member with that id
#[utoipa::path(
    put,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    request_body = UpdateTeamMemberDto,
    responses(
        (status = 200, description = "Updated team member", body = TeamMemberDto),
        (status = 400, description = "Invalid team member data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTeamMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = UpdateTeamMemberParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match TeamService::new(&state.db).update(params).await? {
        Some(member) => Ok((StatusCode::OK, Json(member.into_dto()))),
        None => Err(AppError::NotFound("Team member not found".to_string())),
    }
}

/// Delete a team member.
///
/// # Access Control
/// - `Admin` - Only admins can delete team members; nobody can delete themselves
///
/// # Returns
/// - `204 No Content` - Team member deleted
/// - `400 Bad Request` - Own account, or the member still has invoices
/// - `404 Not Found` - No team member with that id
#[utoipa::path(
    delete,
    path = "/api/team/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team member ID")),
    responses(
        (status = 204, description = "Team member deleted"),
        (status = 400, description = "Team member cannot be deleted", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Team member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if TeamService::new(&state.db).delete(admin.id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Team member not found".to_string()))
    }
}
