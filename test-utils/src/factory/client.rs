//! Client factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients.
///
/// Defaults to an active individual client with a unique email.
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    client_type: String,
    first_name: Option<String>,
    last_name: Option<String>,
    company_name: Option<String>,
    email: String,
    status: String,
    assigned_to: Option<i32>,
}

impl<'a> ClientFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            client_type: "individual".to_string(),
            first_name: Some("Client".to_string()),
            last_name: Some(id.to_string()),
            company_name: None,
            email: format!("client{}@example.test", id),
            status: "active".to_string(),
            assigned_to: None,
        }
    }

    /// Turns the client into a corporate client with the given company name.
    pub fn company(mut self, company_name: impl Into<String>) -> Self {
        self.client_type = "corporate".to_string();
        self.company_name = Some(company_name.into());
        self.first_name = None;
        self.last_name = None;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn assigned_to(mut self, member_id: i32) -> Self {
        self.assigned_to = Some(member_id);
        self
    }

    /// Inserts the client.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now();
        entity::client::ActiveModel {
            client_type: ActiveValue::Set(self.client_type),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            company_name: ActiveValue::Set(self.company_name),
            email: ActiveValue::Set(self.email),
            phone: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            zip_code: ActiveValue::Set(None),
            country: ActiveValue::Set(None),
            tax_id: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            assigned_to: ActiveValue::Set(self.assigned_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an individual client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
