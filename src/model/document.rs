use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::enums::{DocumentCategory, DocumentStatus};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DocumentDto {
    pub id: i32,
    pub case_id: i32,
    pub case_number: Option<String>,
    pub uploaded_by: i32,
    pub uploader_name: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Metadata for a file stored outside the application.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateDocumentDto {
    pub case_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: Option<DocumentCategory>,
    pub status: Option<DocumentStatus>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateDocumentDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<DocumentCategory>,
    pub status: Option<DocumentStatus>,
}

#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct DocumentQueryDto {
    pub case_id: Option<i32>,
    pub category: Option<DocumentCategory>,
    pub uploaded_by: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedDocumentsDto {
    pub documents: Vec<DocumentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
