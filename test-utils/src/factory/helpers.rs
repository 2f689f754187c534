//! Shared helpers for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a well-formed identifier in a period no test allocates into.
///
/// Keeps factory-made case and invoice numbers out of the way of numbers
/// allocated for the current month.
///
/// # Arguments
/// - `prefix` - Identifier prefix such as `INV`
///
/// # Returns
/// - `String` - Identifier like `INV-200001-0042`
pub fn archived_identifier(prefix: &str) -> String {
    format!("{}-200001-{:04}", prefix, next_id() % 9999 + 1)
}

/// Creates a team member and a client assigned to them.
///
/// # Returns
/// - `Ok((member, client))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_client_with_member(
    db: &DatabaseConnection,
) -> Result<(entity::team_member::Model, entity::client::Model), DbErr> {
    let member = crate::factory::team_member::create_team_member(db).await?;
    let client = crate::factory::client::ClientFactory::new(db)
        .assigned_to(member.id)
        .build()
        .await?;

    Ok((member, client))
}

/// Creates a team member, a client and a case linking both.
///
/// # Returns
/// - `Ok((member, client, case))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_case_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::team_member::Model,
        entity::client::Model,
        entity::legal_case::Model,
    ),
    DbErr,
> {
    let (member, client) = create_client_with_member(db).await?;
    let case = crate::factory::legal_case::LegalCaseFactory::new(db)
        .client_id(client.id)
        .assigned_to(member.id)
        .build()
        .await?;

    Ok((member, client, case))
}
