//! Domain models for document metadata.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        document::{
            CreateDocumentDto, DocumentDto, DocumentQueryDto, PaginatedDocumentsDto,
            UpdateDocumentDto,
        },
        enums::{DocumentCategory, DocumentStatus},
    },
    server::{
        error::internal::InternalError,
        model::{non_blank, optional_text, team_member::member_name, Page},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
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

impl Document {
    pub fn from_entity(entity: entity::document::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            case_id: entity.case_id,
            case_number: None,
            uploaded_by: entity.uploaded_by,
            uploader_name: None,
            title: entity.title,
            description: entity.description,
            file_path: entity.file_path,
            file_type: entity.file_type,
            file_size: entity.file_size,
            category: entity.category.parse()?,
            status: entity.status.parse()?,
            version: entity.version,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts an entity model along with its joined case and uploader.
    pub fn from_joined(
        entity: entity::document::Model,
        case: Option<&entity::legal_case::Model>,
        uploader: Option<&entity::team_member::Model>,
    ) -> Result<Self, InternalError> {
        let mut document = Self::from_entity(entity)?;
        document.case_number = case.map(|c| c.case_number.clone());
        document.uploader_name = uploader.map(member_name);
        Ok(document)
    }

    pub fn into_dto(self) -> DocumentDto {
        DocumentDto {
            id: self.id,
            case_id: self.case_id,
            case_number: self.case_number,
            uploaded_by: self.uploaded_by,
            uploader_name: self.uploader_name,
            title: self.title,
            description: self.description,
            file_path: self.file_path,
            file_type: self.file_type,
            file_size: self.file_size,
            category: self.category,
            status: self.status,
            version: self.version,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDocumentParams {
    pub case_id: i32,
    pub uploaded_by: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_path: String,
    pub file_type: String,
    pub file_size: i64,
    pub category: DocumentCategory,
    pub status: DocumentStatus,
}

impl CreateDocumentParams {
    /// # Arguments
    /// - `uploaded_by` - Id of the authenticated member registering the document
    /// - `dto` - Request body
    pub fn from_dto(uploaded_by: i32, dto: CreateDocumentDto) -> Result<Self, String> {
        let title = non_blank(&dto.title).ok_or("Document title is required")?;
        let file_path = non_blank(&dto.file_path).ok_or("File path is required")?;
        let file_type = non_blank(&dto.file_type).ok_or("File type is required")?;

        if dto.file_size < 0 {
            return Err("File size cannot be negative".to_string());
        }

        Ok(Self {
            case_id: dto.case_id,
            uploaded_by,
            title,
            description: optional_text(dto.description),
            file_path,
            file_type,
            file_size: dto.file_size,
            category: dto.category.unwrap_or(DocumentCategory::Other),
            status: dto.status.unwrap_or(DocumentStatus::Draft),
        })
    }
}

/// Metadata changes; applying any of them bumps the document version.
#[derive(Debug, Clone, Default)]
pub struct UpdateDocumentParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<DocumentCategory>,
    pub status: Option<DocumentStatus>,
}

impl UpdateDocumentParams {
    pub fn from_dto(id: i32, dto: UpdateDocumentDto) -> Result<Self, String> {
        let title = match dto.title {
            Some(title) => Some(non_blank(&title).ok_or("Document title cannot be empty")?),
            None => None,
        };

        Ok(Self {
            id,
            title,
            description: dto.description,
            category: dto.category,
            status: dto.status,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub case_id: Option<i32>,
    pub category: Option<DocumentCategory>,
    pub uploaded_by: Option<i32>,
}

impl From<DocumentQueryDto> for DocumentFilter {
    fn from(query: DocumentQueryDto) -> Self {
        Self {
            case_id: query.case_id,
            category: query.category,
            uploaded_by: query.uploaded_by,
        }
    }
}

impl Page<Document> {
    pub fn into_dto(self) -> PaginatedDocumentsDto {
        PaginatedDocumentsDto {
            documents: self.items.into_iter().map(Document::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
