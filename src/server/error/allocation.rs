use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::identifier::PeriodKey};

/// Failure to allocate a sequential identifier.
///
/// Uniqueness conflicts are retried inside the allocator and only show up here once
/// every attempt has been used.
#[derive(Error, Debug)]
pub enum AllocationError {
    /// Every attempt lost a race to a concurrent writer. Results in 503.
    #[error("Gave up allocating {prefix}-{period} identifier after {attempts} conflicting attempts")]
    ConflictRetriesExhausted {
        prefix: String,
        period: PeriodKey,
        attempts: u32,
    },

    /// The store could not be reached. Results in 503, not retried.
    #[error("Identifier store unavailable: {0}")]
    StoreUnavailable(#[source] DbErr),

    /// The current maximum identifier for the period cannot be parsed. Results in 500.
    #[error("Stored identifier '{value}' is malformed")]
    MalformedIdentifier { value: String },

    /// The period already used its last sequence number. Results in 500.
    #[error("Sequence for {prefix}-{period} is exhausted")]
    SequenceExhausted { prefix: String, period: PeriodKey },

    /// Any other store failure while reading or inserting. Results in 500.
    #[error(transparent)]
    Store(DbErr),
}

impl From<DbErr> for AllocationError {
    /// Separates connection failures from other database errors.
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::StoreUnavailable(err),
            err => Self::Store(err),
        }
    }
}

impl AllocationError {
    /// Whether the caller may reasonably retry the whole request later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::ConflictRetriesExhausted { .. } | Self::StoreUnavailable(_)
        )
    }
}

/// Converts allocation errors into HTTP responses.
///
/// # Returns
/// - 503 Service Unavailable - Conflicts exhausted or store unreachable
/// - 500 Internal Server Error - Malformed data, exhausted sequence or other store error
impl IntoResponse for AllocationError {
    fn into_response(self) -> Response {
        if self.is_transient() {
            tracing::warn!("{}", self);

            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: "Temporarily unable to allocate identifier, please retry".to_string(),
                }),
            )
                .into_response();
        }

        tracing::error!("{}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
