//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every handler. Domain errors keep
//! their own `IntoResponse` mapping; everything else becomes a logged 500.

pub mod allocation;
pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, enums::UnknownVariant},
    server::error::{
        allocation::AllocationError, auth::AuthError, config::ConfigError,
        internal::InternalError,
    },
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup. Always a 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error, mapped by `AuthError` (401/403/409).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Identifier allocation failure, mapped by `AllocationError` (503/500).
    #[error(transparent)]
    AllocationErr(#[from] AllocationError),

    /// Unexpected internal state such as a corrupt stored value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found, 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request, 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current state of the resource, 409.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with a message that is logged but not returned.
    #[error("{0}")]
    InternalError(String),
}

impl From<UnknownVariant> for AppError {
    fn from(err: UnknownVariant) -> Self {
        AppError::InternalErr(err.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr` and `AllocationErr`, delegated to their own mapping
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AllocationErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response.
///
/// The client only sees a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
