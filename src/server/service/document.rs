use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        document::DocumentRepository, legal_case::LegalCaseRepository,
        team_member::TeamMemberRepository,
    },
    error::AppError,
    model::{
        document::{CreateDocumentParams, Document, DocumentFilter, UpdateDocumentParams},
        Page,
    },
};

pub struct DocumentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers document metadata under an existing case.
    ///
    /// # Returns
    /// - `Ok(Document)` - Created document at version 1
    /// - `Err(AppError::BadRequest)` - The case does not exist
    pub async fn create(&self, params: CreateDocumentParams) -> Result<Document, AppError> {
        if !LegalCaseRepository::new(self.db).exists(params.case_id).await? {
            return Err(AppError::BadRequest(format!(
                "Case {} does not exist",
                params.case_id
            )));
        }

        let document = DocumentRepository::new(self.db).create(params).await?;

        self.with_names(document).await
    }

    /// Documents matching `filter` with case number and uploader name.
    pub async fn get_paginated(
        &self,
        filter: &DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Document>, AppError> {
        let (documents, total) = DocumentRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let cases = LegalCaseRepository::new(self.db)
            .find_map(documents.iter().map(|d| d.case_id))
            .await?;
        let uploaders = TeamMemberRepository::new(self.db)
            .find_map(documents.iter().map(|d| d.uploaded_by))
            .await?;

        let documents = documents
            .into_iter()
            .map(|document| {
                let case = cases.get(&document.case_id);
                let uploader = uploaders.get(&document.uploaded_by);
                Document::from_joined(document, case, uploader)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(documents, total, page, per_page))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Document>, AppError> {
        match DocumentRepository::new(self.db).find_by_id(id).await? {
            Some(document) => Ok(Some(self.with_names(document).await?)),
            None => Ok(None),
        }
    }

    /// Applies metadata changes; any change increments the version.
    pub async fn update(&self, params: UpdateDocumentParams) -> Result<Option<Document>, AppError> {
        match DocumentRepository::new(self.db).update(params).await? {
            Some(document) => Ok(Some(self.with_names(document).await?)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(DocumentRepository::new(self.db).delete(id).await?)
    }

    async fn with_names(&self, document: entity::document::Model) -> Result<Document, AppError> {
        let case = LegalCaseRepository::new(self.db)
            .find_by_id(document.case_id)
            .await?;
        let uploader = TeamMemberRepository::new(self.db)
            .find_by_id(document.uploaded_by)
            .await?;

        Ok(Document::from_joined(
            document,
            case.as_ref(),
            uploader.as_ref(),
        )?)
    }
}
