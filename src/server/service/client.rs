use sea_orm::DatabaseConnection;

use crate::{
    model::enums::ClientType,
    server::{
        data::{client::ClientRepository, team_member::TeamMemberRepository},
        error::AppError,
        model::{
            client::{
                validate_identity, Client, ClientFilter, CreateClientParams, UpdateClientParams,
            },
            Page,
        },
        service::{foreign_key_as_bad_request, unique_as_bad_request},
    },
};

const DUPLICATE_EMAIL: &str = "A client with this email already exists";

pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Client)` - Created client
    /// - `Err(AppError::BadRequest)` - Unknown assignee or email already in use
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, AppError> {
        self.ensure_member(params.assigned_to).await?;

        let client = ClientRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| unique_as_bad_request(e, DUPLICATE_EMAIL))?;

        Ok(Client::from_entity(client)?)
    }

    pub async fn get_paginated(
        &self,
        filter: &ClientFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Client>, AppError> {
        let (clients, total) = ClientRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let clients = clients
            .into_iter()
            .map(Client::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(clients, total, page, per_page))
    }

    pub async fn get(&self, id: i32) -> Result<Option<Client>, AppError> {
        ClientRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Client::from_entity)
            .transpose()
            .map_err(Into::into)
    }

    /// Applies the changes after checking the merged identity fields.
    ///
    /// Switching a client to `corporate` needs a company name either in the update
    /// or already on record, and likewise for the names of an individual.
    ///
    /// # Returns
    /// - `Ok(Some(Client))` - Updated client
    /// - `Ok(None)` - No client with that id
    /// - `Err(AppError::BadRequest)` - Identity incomplete, unknown assignee or email taken
    pub async fn update(&self, params: UpdateClientParams) -> Result<Option<Client>, AppError> {
        let repo = ClientRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let client_type = match params.client_type {
            Some(client_type) => client_type,
            None => existing.client_type.parse::<ClientType>()?,
        };
        validate_identity(
            client_type,
            params.first_name.as_deref().or(existing.first_name.as_deref()),
            params.last_name.as_deref().or(existing.last_name.as_deref()),
            params.company_name.as_deref().or(existing.company_name.as_deref()),
        )
        .map_err(AppError::BadRequest)?;

        self.ensure_member(params.assigned_to).await?;

        let client = repo
            .update(existing, params)
            .await
            .map_err(|e| unique_as_bad_request(e, DUPLICATE_EMAIL))?;

        Ok(Some(Client::from_entity(client)?))
    }

    /// # Returns
    /// - `Ok(true)` - Client deleted; its cases lose their client reference
    /// - `Ok(false)` - No client with that id
    /// - `Err(AppError::BadRequest)` - Invoices still reference the client
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        ClientRepository::new(self.db)
            .delete(id)
            .await
            .map_err(|e| foreign_key_as_bad_request(e, "Client has invoices and cannot be deleted"))
    }

    async fn ensure_member(&self, member_id: Option<i32>) -> Result<(), AppError> {
        let Some(member_id) = member_id else {
            return Ok(());
        };

        match TeamMemberRepository::new(self.db).find_by_id(member_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest(format!(
                "Team member {} does not exist",
                member_id
            ))),
        }
    }
}
