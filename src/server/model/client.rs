//! Domain models for clients.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        client::{ClientDto, PaginatedClientsDto, ClientQueryDto, CreateClientDto, UpdateClientDto},
        enums::{ClientStatus, ClientType},
    },
    server::{
        error::internal::InternalError,
        model::{normalize_email, optional_text, Page},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub client_type: ClientType,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
    pub assigned_to: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    pub fn from_entity(entity: entity::client::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            client_type: entity.client_type.parse()?,
            first_name: entity.first_name,
            last_name: entity.last_name,
            company_name: entity.company_name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
            country: entity.country,
            tax_id: entity.tax_id,
            notes: entity.notes,
            status: entity.status.parse()?,
            assigned_to: entity.assigned_to,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn display_name(&self) -> String {
        display_name(
            &self.client_type.to_string(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.company_name.as_deref(),
        )
    }

    pub fn into_dto(self) -> ClientDto {
        ClientDto {
            display_name: self.display_name(),
            id: self.id,
            client_type: self.client_type,
            first_name: self.first_name,
            last_name: self.last_name,
            company_name: self.company_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            tax_id: self.tax_id,
            notes: self.notes,
            status: self.status,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Company name for corporate clients, "first last" for individuals.
///
/// Works on raw columns so joined rows can be labelled without a full conversion.
pub fn display_name(
    client_type: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
    company_name: Option<&str>,
) -> String {
    if client_type == ClientType::Corporate.as_str() {
        if let Some(company) = company_name {
            return company.to_string();
        }
    }

    [first_name, last_name]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for a joined client row.
pub fn client_name(entity: &entity::client::Model) -> String {
    display_name(
        &entity.client_type,
        entity.first_name.as_deref(),
        entity.last_name.as_deref(),
        entity.company_name.as_deref(),
    )
}

/// Checks the name fields required by the client type.
///
/// # Returns
/// - `Ok(())` - Individual with first and last name, or corporate with company name
/// - `Err(String)` - Message naming the missing field
pub fn validate_identity(
    client_type: ClientType,
    first_name: Option<&str>,
    last_name: Option<&str>,
    company_name: Option<&str>,
) -> Result<(), String> {
    match client_type {
        ClientType::Individual if first_name.is_none() || last_name.is_none() => {
            Err("Individual clients require a first and last name".to_string())
        }
        ClientType::Corporate if company_name.is_none() => {
            Err("Corporate clients require a company name".to_string())
        }
        _ => Ok(()),
    }
}

#[derive(Debug, Clone)]
pub struct CreateClientParams {
    pub client_type: ClientType,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub status: ClientStatus,
    pub assigned_to: Option<i32>,
}

impl CreateClientParams {
    /// Normalizes the DTO and checks identity fields and email.
    ///
    /// # Returns
    /// - `Ok(CreateClientParams)` - Validated parameters
    /// - `Err(String)` - Validation message for a 400 response
    pub fn from_dto(dto: CreateClientDto) -> Result<Self, String> {
        let email = normalize_email(&dto.email).ok_or("A valid email is required")?;
        let first_name = optional_text(dto.first_name);
        let last_name = optional_text(dto.last_name);
        let company_name = optional_text(dto.company_name);

        validate_identity(
            dto.client_type,
            first_name.as_deref(),
            last_name.as_deref(),
            company_name.as_deref(),
        )?;

        Ok(Self {
            client_type: dto.client_type,
            first_name,
            last_name,
            company_name,
            email,
            phone: optional_text(dto.phone),
            address: optional_text(dto.address),
            city: optional_text(dto.city),
            state: optional_text(dto.state),
            zip_code: optional_text(dto.zip_code),
            country: optional_text(dto.country),
            tax_id: optional_text(dto.tax_id),
            notes: optional_text(dto.notes),
            status: dto.status.unwrap_or(ClientStatus::Active),
            assigned_to: dto.assigned_to,
        })
    }
}

/// Fields to change on a client; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientParams {
    pub id: i32,
    pub client_type: Option<ClientType>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
    pub status: Option<ClientStatus>,
    pub assigned_to: Option<i32>,
}

impl UpdateClientParams {
    pub fn from_dto(id: i32, dto: UpdateClientDto) -> Result<Self, String> {
        let email = match dto.email {
            Some(email) => Some(normalize_email(&email).ok_or("A valid email is required")?),
            None => None,
        };

        Ok(Self {
            id,
            client_type: dto.client_type,
            first_name: optional_text(dto.first_name),
            last_name: optional_text(dto.last_name),
            company_name: optional_text(dto.company_name),
            email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            zip_code: dto.zip_code,
            country: dto.country,
            tax_id: dto.tax_id,
            notes: dto.notes,
            status: dto.status,
            assigned_to: dto.assigned_to,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub status: Option<ClientStatus>,
    pub client_type: Option<ClientType>,
    pub assigned_to: Option<i32>,
}

impl From<ClientQueryDto> for ClientFilter {
    fn from(query: ClientQueryDto) -> Self {
        Self {
            status: query.status,
            client_type: query.client_type,
            assigned_to: query.assigned_to,
        }
    }
}

impl Page<Client> {
    pub fn into_dto(self) -> PaginatedClientsDto {
        PaginatedClientsDto {
            clients: self.items.into_iter().map(Client::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
