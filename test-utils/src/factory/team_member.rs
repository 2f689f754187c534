//! Team member factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test team members.
///
/// The default password hash is not a valid hash; tests that log in must
/// set one with `password_hash()`.
pub struct TeamMemberFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
    department: Option<String>,
}

impl<'a> TeamMemberFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Member"`
    /// - last_name: `"{id}"`
    /// - email: `"member{id}@firm.test"`
    /// - role: `"attorney"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Member".to_string(),
            last_name: id.to_string(),
            email: format!("member{}@firm.test", id),
            password_hash: "unusable".to_string(),
            role: "attorney".to_string(),
            department: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Sets the role, one of `admin`, `attorney`, `paralegal` or `assistant`.
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Inserts the team member.
    ///
    /// # Returns
    /// - `Ok(entity::team_member::Model)` - Created team member
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team_member::Model, DbErr> {
        let now = Utc::now();
        entity::team_member::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            department: ActiveValue::Set(self.department),
            phone: ActiveValue::Set(None),
            last_login_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attorney with default values.
pub async fn create_team_member(
    db: &DatabaseConnection,
) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db).build().await
}

/// Creates an admin with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::team_member::Model, DbErr> {
    TeamMemberFactory::new(db).role("admin").build().await
}
