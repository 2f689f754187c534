use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No team member id stored in the session.
    #[error("No authenticated team member in session")]
    UserNotInSession,

    /// Session references a team member that no longer exists.
    #[error("Team member {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated member lacks the required role.
    ///
    /// # Fields
    /// - Team member id
    /// - Description of the denied action, logged only
    #[error("Team member {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email or wrong password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password change attempted with the wrong current password.
    #[error("Current password for team member {0} is incorrect")]
    IncorrectCurrentPassword(i32),

    /// Bootstrap code missing, wrong or expired.
    #[error("Invalid or expired bootstrap code")]
    InvalidBootstrapCode,

    /// Bootstrap attempted after an administrator already exists.
    #[error("An administrator already exists")]
    AdminAlreadyExists,
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 401 Unauthorized - Missing session, stale session or bad credentials
/// - 403 Forbidden - Insufficient role or bad bootstrap code
/// - 409 Conflict - Bootstrap after an admin exists
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Not authenticated")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::IncorrectCurrentPassword(_) => {
                (StatusCode::UNAUTHORIZED, "Current password is incorrect")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::InvalidBootstrapCode => {
                (StatusCode::FORBIDDEN, "Invalid or expired bootstrap code")
            }
            Self::AdminAlreadyExists => (StatusCode::CONFLICT, "An administrator already exists"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
