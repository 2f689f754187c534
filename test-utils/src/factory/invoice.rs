//! Invoice factory.

use crate::factory::helpers::archived_identifier;
use chrono::{Days, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test invoices.
///
/// Inserts the invoice row only; line items are added with `create_item`.
pub struct InvoiceFactory<'a> {
    db: &'a DatabaseConnection,
    client_id: i32,
    created_by: i32,
    invoice_number: String,
    status: String,
    subtotal_cents: i64,
}

impl<'a> InvoiceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, client_id: i32, created_by: i32) -> Self {
        Self {
            db,
            client_id,
            created_by,
            invoice_number: archived_identifier("INV"),
            status: "draft".to_string(),
            subtotal_cents: 10_000,
        }
    }

    pub fn invoice_number(mut self, invoice_number: impl Into<String>) -> Self {
        self.invoice_number = invoice_number.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the subtotal; tax is derived at 16%.
    pub fn subtotal_cents(mut self, subtotal_cents: i64) -> Self {
        self.subtotal_cents = subtotal_cents;
        self
    }

    /// Inserts the invoice.
    pub async fn build(self) -> Result<entity::invoice::Model, DbErr> {
        let now = Utc::now();
        let tax_cents = (self.subtotal_cents * 16 + 50) / 100;
        let due_date = now.date_naive().checked_add_days(Days::new(30)).unwrap_or(now.date_naive());

        entity::invoice::ActiveModel {
            invoice_number: ActiveValue::Set(self.invoice_number),
            client_id: ActiveValue::Set(self.client_id),
            issue_date: ActiveValue::Set(now),
            due_date: ActiveValue::Set(due_date),
            subtotal_cents: ActiveValue::Set(self.subtotal_cents),
            tax_cents: ActiveValue::Set(tax_cents),
            total_cents: ActiveValue::Set(self.subtotal_cents + tax_cents),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(None),
            paid_at: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            terms: ActiveValue::Set(None),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft invoice with default values.
pub async fn create_invoice(
    db: &DatabaseConnection,
    client_id: i32,
    created_by: i32,
) -> Result<entity::invoice::Model, DbErr> {
    InvoiceFactory::new(db, client_id, created_by).build().await
}

/// Adds a line item to an invoice without touching the invoice totals.
pub async fn create_item(
    db: &DatabaseConnection,
    invoice_id: i32,
    quantity: i32,
    unit_price_cents: i64,
) -> Result<entity::invoice_item::Model, DbErr> {
    entity::invoice_item::ActiveModel {
        invoice_id: ActiveValue::Set(invoice_id),
        description: ActiveValue::Set("Legal consultation".to_string()),
        quantity: ActiveValue::Set(quantity),
        unit_price_cents: ActiveValue::Set(unit_price_cents),
        amount_cents: ActiveValue::Set(quantity as i64 * unit_price_cents),
        ..Default::default()
    }
    .insert(db)
    .await
}
