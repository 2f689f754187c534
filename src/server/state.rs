//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction. Both fields are cheap to clone: the database connection
//! is a pool handle and the bootstrap code service shares its code behind an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::bootstrap::BootstrapCodeService;

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// One-time code for creating the first administrator.
    ///
    /// Only holds a code when the server started without any admin.
    pub bootstrap_code_service: BootstrapCodeService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, bootstrap_code_service: BootstrapCodeService) -> Self {
        Self {
            db,
            bootstrap_code_service,
        }
    }
}
