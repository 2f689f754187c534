//! Document factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test document metadata records.
pub struct DocumentFactory<'a> {
    db: &'a DatabaseConnection,
    case_id: i32,
    uploaded_by: i32,
    title: String,
    category: String,
    status: String,
}

impl<'a> DocumentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, case_id: i32, uploaded_by: i32) -> Self {
        Self {
            db,
            case_id,
            uploaded_by,
            title: format!("Document {}", next_id()),
            category: "other".to_string(),
            status: "draft".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Inserts the document at version 1.
    pub async fn build(self) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now();
        entity::document::ActiveModel {
            case_id: ActiveValue::Set(self.case_id),
            uploaded_by: ActiveValue::Set(self.uploaded_by),
            file_path: ActiveValue::Set(format!("/uploads/{}.pdf", self.title.replace(' ', "_"))),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            file_type: ActiveValue::Set("application/pdf".to_string()),
            file_size: ActiveValue::Set(2048),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a document on the given case with default values.
pub async fn create_document(
    db: &DatabaseConnection,
    case_id: i32,
    uploaded_by: i32,
) -> Result<entity::document::Model, DbErr> {
    DocumentFactory::new(db, case_id, uploaded_by).build().await
}
