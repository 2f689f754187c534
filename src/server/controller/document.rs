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
        document::{
            CreateDocumentDto, DocumentDto, DocumentQueryDto, PaginatedDocumentsDto,
            UpdateDocumentDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::document::{CreateDocumentParams, DocumentFilter, UpdateDocumentParams},
        service::document::DocumentService,
        state::AppState,
    },
};

/// Tag for grouping document endpoints in OpenAPI documentation
pub static DOCUMENT_TAG: &str = "documents";

/// Register document metadata for a case. The current member is recorded as uploader.
///
/// # Returns
/// - `201 Created` - Created document
/// - `400 Bad Request` - Missing fields, negative size or unknown case
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document created", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_document(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params =
        CreateDocumentParams::from_dto(member.id, payload).map_err(AppError::BadRequest)?;

    let document = DocumentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(document.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/documents",
    tag = DOCUMENT_TAG,
    params(PaginationQuery, DocumentQueryDto),
    responses(
        (status = 200, description = "Documents", body = PaginatedDocumentsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<DocumentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let documents = DocumentService::new(&state.db)
        .get_paginated(
            &DocumentFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(documents.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 200, description = "Document", body = DocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match DocumentService::new(&state.db).get(id).await? {
        Some(document) => Ok((StatusCode::OK, Json(document.into_dto()))),
        None => Err(AppError::NotFound("Document not found".to_string())),
    }
}

/// Update document metadata. Every accepted change increments the version.
#[utoipa::path(
    put,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    request_body = UpdateDocumentDto,
    responses(
        (status = 200, description = "Updated document", body = DocumentDto),
        (status = 400, description = "Invalid document data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDocumentDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateDocumentParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match DocumentService::new(&state.db).update(params).await? {
        Some(document) => Ok((StatusCode::OK, Json(document.into_dto()))),
        None => Err(AppError::NotFound("Document not found".to_string())),
    }
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = DOCUMENT_TAG,
    params(("id" = i32, Path, description = "Document ID")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_document(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if DocumentService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Document not found".to_string()))
    }
}
