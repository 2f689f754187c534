//! Legal case factory.

use crate::factory::helpers::{archived_identifier, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cases.
///
/// The default case number lives in an archived period so it never collides
/// with numbers allocated during a test.
pub struct LegalCaseFactory<'a> {
    db: &'a DatabaseConnection,
    case_number: String,
    title: String,
    status: String,
    priority: String,
    client_id: Option<i32>,
    assigned_to: Option<i32>,
}

impl<'a> LegalCaseFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            case_number: archived_identifier("CASE"),
            title: format!("Matter {}", next_id()),
            status: "active".to_string(),
            priority: "medium".to_string(),
            client_id: None,
            assigned_to: None,
        }
    }

    pub fn case_number(mut self, case_number: impl Into<String>) -> Self {
        self.case_number = case_number.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn client_id(mut self, client_id: i32) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn assigned_to(mut self, member_id: i32) -> Self {
        self.assigned_to = Some(member_id);
        self
    }

    /// Inserts the case.
    ///
    /// # Returns
    /// - `Ok(entity::legal_case::Model)` - Created case
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::legal_case::Model, DbErr> {
        let now = Utc::now();
        entity::legal_case::ActiveModel {
            case_number: ActiveValue::Set(self.case_number),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            client_id: ActiveValue::Set(self.client_id),
            assigned_to: ActiveValue::Set(self.assigned_to),
            start_date: ActiveValue::Set(now),
            end_date: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a case for the given client with default values.
pub async fn create_case(
    db: &DatabaseConnection,
    client_id: i32,
) -> Result<entity::legal_case::Model, DbErr> {
    LegalCaseFactory::new(db).client_id(client_id).build().await
}
