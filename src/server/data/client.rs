//! Client repository.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::client::{ClientFilter, CreateClientParams, UpdateClientParams};

pub struct ClientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a client.
    ///
    /// # Returns
    /// - `Ok(Model)` - Created client
    /// - `Err(DbErr)` - Includes a unique violation when the email is taken
    pub async fn create(&self, params: CreateClientParams) -> Result<entity::client::Model, DbErr> {
        let now = Utc::now();

        entity::client::ActiveModel {
            client_type: ActiveValue::Set(params.client_type.as_str().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            company_name: ActiveValue::Set(params.company_name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            city: ActiveValue::Set(params.city),
            state: ActiveValue::Set(params.state),
            zip_code: ActiveValue::Set(params.zip_code),
            country: ActiveValue::Set(params.country),
            tax_id: ActiveValue::Set(params.tax_id),
            notes: ActiveValue::Set(params.notes),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            assigned_to: ActiveValue::Set(params.assigned_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(id).one(self.db).await
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Loads the clients with the given ids, keyed by id.
    pub async fn find_map(
        &self,
        ids: impl IntoIterator<Item = i32>,
    ) -> Result<HashMap<i32, entity::client::Model>, DbErr> {
        let mut ids: Vec<i32> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();

        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let clients = entity::prelude::Client::find()
            .filter(entity::client::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(clients.into_iter().map(|c| (c.id, c)).collect())
    }

    /// Gets clients matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((clients, total))` - Page of clients and the number of matching clients
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ClientFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::client::Model>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::client::Column::CreatedAt)
            .order_by_desc(entity::client::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let clients = paginator.fetch_page(page).await?;

        Ok((clients, total))
    }

    fn filtered(filter: &ClientFilter) -> Select<entity::prelude::Client> {
        let mut query = entity::prelude::Client::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::client::Column::Status.eq(status.as_str()));
        }
        if let Some(client_type) = filter.client_type {
            query = query.filter(entity::client::Column::ClientType.eq(client_type.as_str()));
        }
        if let Some(assigned_to) = filter.assigned_to {
            query = query.filter(entity::client::Column::AssignedTo.eq(assigned_to));
        }

        query
    }

    /// Writes the merged client state.
    ///
    /// The caller validates the identity fields against the existing row first.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated client
    /// - `Err(DbErr)` - Includes a unique violation when the new email is taken
    pub async fn update(
        &self,
        existing: entity::client::Model,
        params: UpdateClientParams,
    ) -> Result<entity::client::Model, DbErr> {
        let mut active: entity::client::ActiveModel = existing.into();

        if let Some(client_type) = params.client_type {
            active.client_type = ActiveValue::Set(client_type.as_str().to_string());
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(Some(first_name));
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(Some(last_name));
        }
        if let Some(company_name) = params.company_name {
            active.company_name = ActiveValue::Set(Some(company_name));
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(city) = params.city {
            active.city = ActiveValue::Set(Some(city));
        }
        if let Some(state) = params.state {
            active.state = ActiveValue::Set(Some(state));
        }
        if let Some(zip_code) = params.zip_code {
            active.zip_code = ActiveValue::Set(Some(zip_code));
        }
        if let Some(country) = params.country {
            active.country = ActiveValue::Set(Some(country));
        }
        if let Some(tax_id) = params.tax_id {
            active.tax_id = ActiveValue::Set(Some(tax_id));
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(assigned_to) = params.assigned_to {
            active.assigned_to = ActiveValue::Set(Some(assigned_to));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes a client.
    ///
    /// # Returns
    /// - `Ok(true)` - Client deleted
    /// - `Ok(false)` - No client with that id
    /// - `Err(DbErr)` - Includes a foreign key violation when invoices reference the client
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
