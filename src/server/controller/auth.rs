use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{
            BootstrapDto, ChangePasswordDto, LoginDto, RegisterDto, TeamMemberDto,
            UpdateProfileDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::team_member::{CreateTeamMemberParams, UpdateTeamMemberParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials, records the login time and stores the member in the
/// session. The session id is rotated on every successful login.
///
/// # Returns
/// - `200 OK` - Logged-in team member
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session store error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TeamMemberDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthService::new(&state.db)
        .login(&payload.email, &payload.password, Utc::now())
        .await?;

    AuthSession::new(&session).set_member_id(member.id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Log out and delete the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the team member logged into the current session.
///
/// # Returns
/// - `200 OK` - Current team member
/// - `401 Unauthorized` - Not logged in, or the member no longer exists
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current team member", body = TeamMemberDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Update the logged-in member's own profile.
///
/// Only names, department and phone can be changed here; role and email changes go
/// through the team endpoints.
///
/// # Returns
/// - `200 OK` - Updated team member
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    put,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = TeamMemberDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params =
        UpdateTeamMemberParams::from_profile_dto(member.id, payload).map_err(AppError::BadRequest)?;

    let member = AuthService::new(&state.db).update_profile(params).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// Change the logged-in member's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password too short or too long
/// - `401 Unauthorized` - Not logged in, or current password is wrong
#[utoipa::path(
    put,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid new password", body = ErrorDto),
        (status = 401, description = "Not logged in or wrong current password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    AuthService::new(&state.db)
        .change_password(member.id, &payload.current_password, &payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated".to_string(),
        }),
    ))
}

/// Register a new team member.
///
/// # Access Control
/// - `Admin` - Only admins can add team members
///
/// # Returns
/// - `201 Created` - Created team member
/// - `400 Bad Request` - Invalid fields or email already in use
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Team member created", body = TeamMemberDto),
        (status = 400, description = "Invalid team member data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let params = CreateTeamMemberParams::from_dto(payload).map_err(AppError::BadRequest)?;

    let member = AuthService::new(&state.db).register(params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Create the first administrator with the bootstrap code logged at startup.
///
/// On success the new administrator is logged in.
///
/// # Returns
/// - `201 Created` - Created administrator
/// - `400 Bad Request` - Invalid fields
/// - `403 Forbidden` - Bootstrap code missing, wrong or expired
/// - `409 Conflict` - An administrator already exists
#[utoipa::path(
    post,
    path = "/api/auth/bootstrap",
    tag = AUTH_TAG,
    request_body = BootstrapDto,
    responses(
        (status = 201, description = "Administrator created", body = TeamMemberDto),
        (status = 400, description = "Invalid team member data", body = ErrorDto),
        (status = 403, description = "Invalid or expired bootstrap code", body = ErrorDto),
        (status = 409, description = "An administrator already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn bootstrap(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BootstrapDto>,
) -> Result<impl IntoResponse, AppError> {
    let code = payload.code.clone();
    let params = CreateTeamMemberParams::admin_from_dto(payload).map_err(AppError::BadRequest)?;

    let admin = AuthService::new(&state.db)
        .bootstrap(&state.bootstrap_code_service, &code, params)
        .await?;

    AuthSession::new(&session).set_member_id(admin.id).await?;

    Ok((StatusCode::CREATED, Json(admin.into_dto())))
}
