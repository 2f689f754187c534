use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::enums::InvoiceStatus;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct InvoiceItemDto {
    pub id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub amount_cents: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct InvoiceDto {
    pub id: i32,
    /// Allocated identifier, `INV-YYYYMM-NNNN`.
    pub invoice_number: String,
    pub client_id: i32,
    pub client_name: Option<String>,
    pub issue_date: DateTime<Utc>,
    pub due_date: NaiveDate,
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
    pub status: InvoiceStatus,
    pub payment_method: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub created_by: i32,
    pub creator_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct InvoiceDetailsDto {
    #[serde(flatten)]
    pub invoice: InvoiceDto,
    pub items: Vec<InvoiceItemDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct InvoiceItemInputDto {
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct CreateInvoiceDto {
    pub client_id: i32,
    pub due_date: NaiveDate,
    pub items: Vec<InvoiceItemInputDto>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

/// Replacing `items` recomputes the invoice totals.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, Default)]
pub struct UpdateInvoiceDto {
    pub client_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub items: Option<Vec<InvoiceItemInputDto>>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct UpdateInvoiceStatusDto {
    pub status: InvoiceStatus,
    /// Required when marking an invoice as paid.
    pub payment_method: Option<String>,
}

#[derive(Deserialize, IntoParams, Clone, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct InvoiceQueryDto {
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<i32>,
    /// Earliest issue date, inclusive.
    pub start_date: Option<NaiveDate>,
    /// Latest issue date, inclusive.
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug)]
pub struct PaginatedInvoicesDto {
    pub invoices: Vec<InvoiceDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
