use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, data::team_member::TeamMemberRepository, error::AppError,
    service::bootstrap::{BootstrapCodeService, BOOTSTRAP_CODE_TTL},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up to date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in their own table of the same SQLite database and expire
/// after 7 days without activity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to add to the router
/// - `Err(AppError::DbErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Logs a one-time bootstrap code when no administrator exists yet.
///
/// The code is redeemed through `POST /api/auth/bootstrap` to create the first admin.
///
/// # Returns
/// - `Ok(())` - An admin exists or a code was generated
/// - `Err(AppError::DbErr)` - Failed to check for administrators
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    bootstrap_code_service: &BootstrapCodeService,
) -> Result<(), AppError> {
    if TeamMemberRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = bootstrap_code_service.generate().await;

    tracing::warn!(
        "No administrator exists. Create one within {} seconds with bootstrap code: {}",
        BOOTSTRAP_CODE_TTL.as_secs(),
        code
    );

    Ok(())
}
