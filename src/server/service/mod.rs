//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! business rules (existence of referenced records, draft-only edits, role-dependent
//! visibility), convert entity models into domain models and map database failures
//! into `AppError` variants the controllers can return directly.

pub mod auth;
pub mod bootstrap;
pub mod client;
pub mod document;
pub mod invoice;
pub mod leave;
pub mod legal_case;
pub mod numbering;
pub mod task;
pub mod team;

#[cfg(test)]
mod test;

use sea_orm::DbErr;

use crate::server::{
    data::{is_foreign_key_violation, is_unique_violation},
    error::AppError,
};

/// Maps a unique index violation to a 400 with `message`, passing other errors through.
pub(crate) fn unique_as_bad_request(err: DbErr, message: &str) -> AppError {
    if is_unique_violation(&err) {
        AppError::BadRequest(message.to_string())
    } else {
        err.into()
    }
}

/// Maps a foreign key violation to a 400 with `message`, passing other errors through.
pub(crate) fn foreign_key_as_bad_request(err: DbErr, message: &str) -> AppError {
    if is_foreign_key_violation(&err) {
        AppError::BadRequest(message.to_string())
    } else {
        err.into()
    }
}
