use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        client::{
            ClientDto, ClientQueryDto, CreateClientDto, PaginatedClientsDto, UpdateClientDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::client::{ClientFilter, CreateClientParams, UpdateClientParams},
        service::client::ClientService,
        state::AppState,
    },
};

/// Tag for grouping client endpoints in OpenAPI documentation
pub static CLIENT_TAG: &str = "clients";

/// Create a client.
///
/// Individual clients need a first and last name, corporate clients a company name.
///
/// # Returns
/// - `201 Created` - Created client
/// - `400 Bad Request` - Missing name fields, invalid email, email in use or unknown assignee
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Client created", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateClientParams::from_dto(payload).map_err(AppError::BadRequest)?;

    let client = ClientService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

/// Get paginated clients, newest first.
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = CLIENT_TAG,
    params(PaginationQuery, ClientQueryDto),
    responses(
        (status = 200, description = "Clients", body = PaginatedClientsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clients(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<ClientQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let clients = ClientService::new(&state.db)
        .get_paginated(
            &ClientFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(clients.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client", body = ClientDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match ClientService::new(&state.db).get(id).await? {
        Some(client) => Ok((StatusCode::OK, Json(client.into_dto()))),
        None => Err(AppError::NotFound("Client not found".to_string())),
    }
}

/// Update a client.
///
/// Name requirements are checked against the merged result, so changing the client
/// type may require sending the matching name fields.
#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateClientParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match ClientService::new(&state.db).update(params).await? {
        Some(client) => Ok((StatusCode::OK, Json(client.into_dto()))),
        None => Err(AppError::NotFound("Client not found".to_string())),
    }
}

/// Delete a client. Cases of the client are kept without a client.
///
/// # Access Control
/// - `Admin` - Only admins can delete clients
///
/// # Returns
/// - `204 No Content` - Client deleted
/// - `400 Bad Request` - The client still has invoices
/// - `404 Not Found` - No client with that id
#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = CLIENT_TAG,
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, description = "Client has invoices", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if ClientService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Client not found".to_string()))
    }
}
