//! Document metadata repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::document::{
    CreateDocumentParams, DocumentFilter, UpdateDocumentParams,
};

pub struct DocumentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DocumentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts document metadata at version 1.
    pub async fn create(
        &self,
        params: CreateDocumentParams,
    ) -> Result<entity::document::Model, DbErr> {
        let now = Utc::now();

        entity::document::ActiveModel {
            case_id: ActiveValue::Set(params.case_id),
            uploaded_by: ActiveValue::Set(params.uploaded_by),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            file_path: ActiveValue::Set(params.file_path),
            file_type: ActiveValue::Set(params.file_type),
            file_size: ActiveValue::Set(params.file_size),
            category: ActiveValue::Set(params.category.as_str().to_string()),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            version: ActiveValue::Set(1),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::document::Model>, DbErr> {
        entity::prelude::Document::find_by_id(id).one(self.db).await
    }

    /// Documents filed under a case, newest first.
    pub async fn find_by_case(&self, case_id: i32) -> Result<Vec<entity::document::Model>, DbErr> {
        entity::prelude::Document::find()
            .filter(entity::document::Column::CaseId.eq(case_id))
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets documents matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((documents, total))` - Page of documents and the number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &DocumentFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::document::Model>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::document::Column::CreatedAt)
            .order_by_desc(entity::document::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let documents = paginator.fetch_page(page).await?;

        Ok((documents, total))
    }

    fn filtered(filter: &DocumentFilter) -> Select<entity::prelude::Document> {
        let mut query = entity::prelude::Document::find();

        if let Some(case_id) = filter.case_id {
            query = query.filter(entity::document::Column::CaseId.eq(case_id));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::document::Column::Category.eq(category.as_str()));
        }
        if let Some(uploaded_by) = filter.uploaded_by {
            query = query.filter(entity::document::Column::UploadedBy.eq(uploaded_by));
        }

        query
    }

    /// Applies the metadata changes and increments the version.
    ///
    /// An update without any field leaves the row, including its version, untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated document
    /// - `Ok(None)` - No document with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateDocumentParams,
    ) -> Result<Option<entity::document::Model>, DbErr> {
        let Some(document) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        if params.is_empty() {
            return Ok(Some(document));
        }

        let version = document.version + 1;
        let mut active: entity::document::ActiveModel = document.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.version = ActiveValue::Set(version);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Document::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
