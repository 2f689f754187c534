use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginationQuery},
        invoice::{
            CreateInvoiceDto, InvoiceDetailsDto, InvoiceQueryDto, PaginatedInvoicesDto,
            UpdateInvoiceDto, UpdateInvoiceStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::invoice::{CreateInvoiceParams, InvoiceFilter, UpdateInvoiceParams},
        service::invoice::InvoiceService,
        state::AppState,
    },
};

/// Tag for grouping invoice endpoints in OpenAPI documentation
pub static INVOICE_TAG: &str = "invoices";

/// Create a draft invoice.
///
/// The invoice receives the next `INV-YYYYMM-NNNN` number of the current month. Item
/// amounts, subtotal, 16% tax and total are computed server side.
///
/// # Access Control
/// - `Billing` - Admins and attorneys
///
/// # Returns
/// - `201 Created` - Created invoice with items
/// - `400 Bad Request` - No items, invalid item, due date before today or unknown client
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Neither admin nor attorney
/// - `503 Service Unavailable` - No invoice number could be allocated right now
#[utoipa::path(
    post,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    request_body = CreateInvoiceDto,
    responses(
        (status = 201, description = "Invoice created", body = InvoiceDetailsDto),
        (status = 400, description = "Invalid invoice data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator or attorney role required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Invoice number could not be allocated", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Billing])
        .await?;

    let now = Utc::now();
    let params =
        CreateInvoiceParams::from_dto(member.id, payload, now).map_err(AppError::BadRequest)?;

    let invoice = InvoiceService::new(&state.db).create(params, now).await?;

    Ok((StatusCode::CREATED, Json(invoice.into_dto())))
}

/// Get paginated invoices, newest first, with client names.
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = INVOICE_TAG,
    params(PaginationQuery, InvoiceQueryDto),
    responses(
        (status = 200, description = "Invoices", body = PaginatedInvoicesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
    Query(query): Query<InvoiceQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let invoices = InvoiceService::new(&state.db)
        .get_paginated(
            &InvoiceFilter::from(query),
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((StatusCode::OK, Json(invoices.into_dto())))
}

/// Get an invoice with its items, client and creator.
#[utoipa::path(
    get,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 200, description = "Invoice with items", body = InvoiceDetailsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    match InvoiceService::new(&state.db).get(id).await? {
        Some(invoice) => Ok((StatusCode::OK, Json(invoice.into_dto()))),
        None => Err(AppError::NotFound("Invoice not found".to_string())),
    }
}

/// Edit a draft invoice. Sending `items` replaces all items and recomputes totals.
///
/// # Access Control
/// - `Billing` - Admins and attorneys
///
/// # Returns
/// - `200 OK` - Updated invoice
/// - `400 Bad Request` - Invoice is not a draft, invalid items or unknown client
/// - `404 Not Found` - No invoice with that id
#[utoipa::path(
    put,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceDto,
    responses(
        (status = 200, description = "Updated invoice", body = InvoiceDetailsDto),
        (status = 400, description = "Invalid invoice data or invoice not a draft", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator or attorney role required", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Billing])
        .await?;

    let params = UpdateInvoiceParams::from_dto(id, payload).map_err(AppError::BadRequest)?;

    match InvoiceService::new(&state.db).update(params).await? {
        Some(invoice) => Ok((StatusCode::OK, Json(invoice.into_dto()))),
        None => Err(AppError::NotFound("Invoice not found".to_string())),
    }
}

/// Change the status of an invoice.
///
/// Marking an invoice `paid` requires a payment method and records the payment time.
/// Paid and cancelled invoices cannot change status again.
///
/// # Access Control
/// - `Billing` - Admins and attorneys
#[utoipa::path(
    put,
    path = "/api/invoices/{id}/status",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice ID")),
    request_body = UpdateInvoiceStatusDto,
    responses(
        (status = 200, description = "Updated invoice", body = InvoiceDetailsDto),
        (status = 400, description = "Status change not allowed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator or attorney role required", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_invoice_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInvoiceStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Billing])
        .await?;

    let updated = InvoiceService::new(&state.db)
        .update_status(id, payload.status, payload.payment_method, Utc::now())
        .await?;

    match updated {
        Some(invoice) => Ok((StatusCode::OK, Json(invoice.into_dto()))),
        None => Err(AppError::NotFound("Invoice not found".to_string())),
    }
}

/// Delete a draft invoice and its items.
///
/// # Access Control
/// - `Admin` - Only admins can delete invoices
///
/// # Returns
/// - `204 No Content` - Draft deleted
/// - `400 Bad Request` - Invoice is not a draft
/// - `404 Not Found` - No invoice with that id
#[utoipa::path(
    delete,
    path = "/api/invoices/{id}",
    tag = INVOICE_TAG,
    params(("id" = i32, Path, description = "Invoice ID")),
    responses(
        (status = 204, description = "Invoice deleted"),
        (status = 400, description = "Invoice is not a draft", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Administrator role required", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_invoice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if InvoiceService::new(&state.db).delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Invoice not found".to_string()))
    }
}
