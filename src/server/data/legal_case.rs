//! Case repository and the case-number sequence store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TransactionTrait,
};

use crate::server::{
    data::is_unique_violation,
    model::{
        identifier::SequentialIdentifier,
        legal_case::{CaseFilter, CreateCaseParams, UpdateCaseParams},
    },
    service::numbering::{InsertOutcome, SequenceStore},
};

pub struct LegalCaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LegalCaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::legal_case::Model>, DbErr> {
        entity::prelude::LegalCase::find_by_id(id).one(self.db).await
    }

    /// Loads the cases with the given ids, keyed by id.
    pub async fn find_map(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::legal_case::Model>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cases = entity::prelude::LegalCase::find()
            .filter(entity::legal_case::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(cases.into_iter().map(|c| (c.id, c)).collect())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::LegalCase::find()
            .filter(entity::legal_case::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets cases matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((cases, total))` - Page of cases and the number of matching cases
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &CaseFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::legal_case::Model>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::legal_case::Column::CreatedAt)
            .order_by_desc(entity::legal_case::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let cases = paginator.fetch_page(page).await?;

        Ok((cases, total))
    }

    fn filtered(filter: &CaseFilter) -> Select<entity::prelude::LegalCase> {
        let mut query = entity::prelude::LegalCase::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::legal_case::Column::Status.eq(status.as_str()));
        }
        if let Some(priority) = filter.priority {
            query = query.filter(entity::legal_case::Column::Priority.eq(priority.as_str()));
        }
        if let Some(assigned_to) = filter.assigned_to {
            query = query.filter(entity::legal_case::Column::AssignedTo.eq(assigned_to));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::legal_case::Column::ClientId.eq(client_id));
        }

        query
    }

    /// Applies the provided fields. The case number never changes.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated case
    /// - `Ok(None)` - No case with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateCaseParams,
    ) -> Result<Option<entity::legal_case::Model>, DbErr> {
        let Some(case) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::legal_case::ActiveModel = case.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(priority) = params.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(client_id) = params.client_id {
            active.client_id = ActiveValue::Set(Some(client_id));
        }
        if let Some(assigned_to) = params.assigned_to {
            active.assigned_to = ActiveValue::Set(Some(assigned_to));
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(start_date);
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a case; its documents are removed and its tasks detached by the schema.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::LegalCase::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::LegalCase::find().count(self.db).await
    }

    /// Number of cases per stored status value.
    pub async fn count_by_status(&self) -> Result<Vec<(String, i64)>, DbErr> {
        self.count_grouped(entity::legal_case::Column::Status).await
    }

    /// Number of cases per stored priority value.
    pub async fn count_by_priority(&self) -> Result<Vec<(String, i64)>, DbErr> {
        self.count_grouped(entity::legal_case::Column::Priority).await
    }

    async fn count_grouped(
        &self,
        column: entity::legal_case::Column,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        entity::prelude::LegalCase::find()
            .select_only()
            .column(column)
            .column_as(entity::legal_case::Column::Id.count(), "count")
            .group_by(column)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}

/// Inserts one new case under an allocated `CASE-YYYYMM-NNNN` number.
pub struct CaseSequenceStore<'a> {
    db: &'a DatabaseConnection,
    params: CreateCaseParams,
}

impl<'a> CaseSequenceStore<'a> {
    pub fn new(db: &'a DatabaseConnection, params: CreateCaseParams) -> Self {
        Self { db, params }
    }
}

#[async_trait]
impl SequenceStore for CaseSequenceStore<'_> {
    type Record = entity::legal_case::Model;

    async fn max_identifier(&self, period_prefix: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::LegalCase::find()
            .select_only()
            .column(entity::legal_case::Column::CaseNumber)
            .filter(entity::legal_case::Column::CaseNumber.starts_with(period_prefix))
            .order_by_desc(entity::legal_case::Column::CaseNumber)
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    async fn insert(
        &self,
        identifier: &SequentialIdentifier,
        now: DateTime<Utc>,
    ) -> Result<InsertOutcome<Self::Record>, DbErr> {
        let params = self.params.clone();
        let txn = self.db.begin().await?;

        let inserted = entity::legal_case::ActiveModel {
            case_number: ActiveValue::Set(identifier.to_string()),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            client_id: ActiveValue::Set(params.client_id),
            assigned_to: ActiveValue::Set(params.assigned_to),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        match inserted {
            Ok(case) => {
                txn.commit().await?;
                Ok(InsertOutcome::Inserted(case))
            }
            Err(err) => {
                txn.rollback().await?;
                if is_unique_violation(&err) {
                    Ok(InsertOutcome::Conflict)
                } else {
                    Err(err)
                }
            }
        }
    }
}
