//! Database repositories.
//!
//! Each repository borrows the connection and returns SeaORM entity models; the
//! service layer converts them into domain models. Identifier-bearing tables also
//! expose a `SequenceStore` used by the allocator.

pub mod client;
pub mod document;
pub mod invoice;
pub mod leave_request;
pub mod legal_case;
pub mod task;
pub mod team_member;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by a unique index.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Whether `err` was raised by a foreign key constraint.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
