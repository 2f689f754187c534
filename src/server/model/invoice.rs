//! Domain models for invoices and their line items.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::{
        enums::InvoiceStatus,
        invoice::{
            CreateInvoiceDto, InvoiceDetailsDto, InvoiceDto, InvoiceItemDto, InvoiceItemInputDto,
            InvoiceQueryDto, PaginatedInvoicesDto, UpdateInvoiceDto,
        },
    },
    server::{
        error::internal::InternalError,
        model::{
            client::client_name, non_blank, optional_text, team_member::member_name, Page,
        },
    },
};

/// Tax applied to every invoice subtotal, in percent.
pub const TAX_RATE_PERCENT: i64 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
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

impl Invoice {
    pub fn from_entity(entity: entity::invoice::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            invoice_number: entity.invoice_number,
            client_id: entity.client_id,
            client_name: None,
            issue_date: entity.issue_date,
            due_date: entity.due_date,
            subtotal_cents: entity.subtotal_cents,
            tax_cents: entity.tax_cents,
            total_cents: entity.total_cents,
            status: entity.status.parse()?,
            payment_method: entity.payment_method,
            paid_at: entity.paid_at,
            notes: entity.notes,
            terms: entity.terms,
            created_by: entity.created_by,
            creator_name: None,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Converts an entity model along with its joined client and creator.
    pub fn from_joined(
        entity: entity::invoice::Model,
        client: Option<&entity::client::Model>,
        creator: Option<&entity::team_member::Model>,
    ) -> Result<Self, InternalError> {
        let mut invoice = Self::from_entity(entity)?;
        invoice.client_name = client.map(client_name);
        invoice.creator_name = creator.map(member_name);
        Ok(invoice)
    }

    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            id: self.id,
            invoice_number: self.invoice_number,
            client_id: self.client_id,
            client_name: self.client_name,
            issue_date: self.issue_date,
            due_date: self.due_date,
            subtotal_cents: self.subtotal_cents,
            tax_cents: self.tax_cents,
            total_cents: self.total_cents,
            status: self.status,
            payment_method: self.payment_method,
            paid_at: self.paid_at,
            notes: self.notes,
            terms: self.terms,
            created_by: self.created_by,
            creator_name: self.creator_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceItem {
    pub id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub amount_cents: i64,
}

impl InvoiceItem {
    pub fn from_entity(entity: entity::invoice_item::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            quantity: entity.quantity,
            unit_price_cents: entity.unit_price_cents,
            amount_cents: entity.amount_cents,
        }
    }

    pub fn into_dto(self) -> InvoiceItemDto {
        InvoiceItemDto {
            id: self.id,
            description: self.description,
            quantity: self.quantity,
            unit_price_cents: self.unit_price_cents,
            amount_cents: self.amount_cents,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InvoiceDetails {
    pub invoice: Invoice,
    pub items: Vec<InvoiceItem>,
}

impl InvoiceDetails {
    pub fn into_dto(self) -> InvoiceDetailsDto {
        InvoiceDetailsDto {
            invoice: self.invoice.into_dto(),
            items: self.items.into_iter().map(InvoiceItem::into_dto).collect(),
        }
    }
}

/// A validated line item whose amount has been computed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub amount_cents: i64,
}

impl InvoiceLine {
    /// Validates a submitted item and computes its amount.
    ///
    /// # Returns
    /// - `Ok(InvoiceLine)` - Item with `amount = quantity × unit price`
    /// - `Err(String)` - Blank description, quantity below 1, negative price or overflow
    pub fn from_dto(dto: InvoiceItemInputDto) -> Result<Self, String> {
        let description = non_blank(&dto.description).ok_or("Item description is required")?;

        if dto.quantity < 1 {
            return Err("Item quantity must be at least 1".to_string());
        }
        if dto.unit_price_cents < 0 {
            return Err("Item unit price cannot be negative".to_string());
        }

        let amount_cents = dto
            .unit_price_cents
            .checked_mul(i64::from(dto.quantity))
            .ok_or("Item amount is too large")?;

        Ok(Self {
            description,
            quantity: dto.quantity,
            unit_price_cents: dto.unit_price_cents,
            amount_cents,
        })
    }
}

/// Validates every item; an invoice needs at least one.
pub fn lines_from_dto(items: Vec<InvoiceItemInputDto>) -> Result<Vec<InvoiceLine>, String> {
    if items.is_empty() {
        return Err("An invoice needs at least one item".to_string());
    }

    items.into_iter().map(InvoiceLine::from_dto).collect()
}

/// Monetary totals of an invoice, in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvoiceTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl InvoiceTotals {
    /// Sums the line amounts and applies tax rounded half up to the cent.
    ///
    /// # Returns
    /// - `Some(InvoiceTotals)` - Computed totals
    /// - `None` - The sums overflow
    pub fn compute(lines: &[InvoiceLine]) -> Option<Self> {
        let subtotal_cents = lines
            .iter()
            .try_fold(0i64, |acc, line| acc.checked_add(line.amount_cents))?;
        let tax_cents = subtotal_cents
            .checked_mul(TAX_RATE_PERCENT)?
            .checked_add(50)?
            / 100;
        let total_cents = subtotal_cents.checked_add(tax_cents)?;

        Some(Self {
            subtotal_cents,
            tax_cents,
            total_cents,
        })
    }
}

/// Input for a new invoice; the number is allocated on insert.
#[derive(Debug, Clone)]
pub struct CreateInvoiceParams {
    pub client_id: i32,
    pub created_by: i32,
    pub issue_date: DateTime<Utc>,
    pub due_date: NaiveDate,
    pub lines: Vec<InvoiceLine>,
    pub totals: InvoiceTotals,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

impl CreateInvoiceParams {
    /// # Arguments
    /// - `created_by` - Id of the authenticated member
    /// - `dto` - Request body
    /// - `now` - Issue date
    pub fn from_dto(
        created_by: i32,
        dto: CreateInvoiceDto,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        let lines = lines_from_dto(dto.items)?;
        let totals = InvoiceTotals::compute(&lines).ok_or("Invoice total is too large")?;

        if dto.due_date < now.date_naive() {
            return Err("Due date cannot be before the issue date".to_string());
        }

        Ok(Self {
            client_id: dto.client_id,
            created_by,
            issue_date: now,
            due_date: dto.due_date,
            lines,
            totals,
            notes: optional_text(dto.notes),
            terms: optional_text(dto.terms),
        })
    }
}

/// Changes to a draft invoice; replacing `lines` also replaces `totals`.
#[derive(Debug, Clone, Default)]
pub struct UpdateInvoiceParams {
    pub id: i32,
    pub client_id: Option<i32>,
    pub due_date: Option<NaiveDate>,
    pub lines: Option<(Vec<InvoiceLine>, InvoiceTotals)>,
    pub notes: Option<String>,
    pub terms: Option<String>,
}

impl UpdateInvoiceParams {
    pub fn from_dto(id: i32, dto: UpdateInvoiceDto) -> Result<Self, String> {
        let lines = match dto.items {
            Some(items) => {
                let lines = lines_from_dto(items)?;
                let totals = InvoiceTotals::compute(&lines).ok_or("Invoice total is too large")?;
                Some((lines, totals))
            }
            None => None,
        };

        Ok(Self {
            id,
            client_id: dto.client_id,
            due_date: dto.due_date,
            lines,
            notes: dto.notes,
            terms: dto.terms,
        })
    }
}

/// Status transition with the payment details recorded for `Paid`.
///
/// `from` is the status the transition was validated against; the write only
/// applies while the invoice still has it.
#[derive(Debug, Clone)]
pub struct InvoiceStatusChange {
    pub from: InvoiceStatus,
    pub status: InvoiceStatus,
    pub payment_method: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl InvoiceStatusChange {
    /// Checks that `current` may move to `next`.
    ///
    /// Terminal invoices cannot change, `Draft` cannot be re-entered and a
    /// payment needs a payment method.
    pub fn validate(
        current: InvoiceStatus,
        next: InvoiceStatus,
        payment_method: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        if current.is_terminal() {
            return Err(format!("A {} invoice cannot change status", current));
        }
        if next == InvoiceStatus::Draft && current != InvoiceStatus::Draft {
            return Err("An issued invoice cannot return to draft".to_string());
        }

        let payment_method = optional_text(payment_method);
        if next == InvoiceStatus::Paid {
            let method = payment_method.ok_or("A payment method is required to mark paid")?;
            return Ok(Self {
                from: current,
                status: next,
                payment_method: Some(method),
                paid_at: Some(now),
            });
        }

        Ok(Self {
            from: current,
            status: next,
            payment_method: None,
            paid_at: None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub status: Option<InvoiceStatus>,
    pub client_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl From<InvoiceQueryDto> for InvoiceFilter {
    fn from(query: InvoiceQueryDto) -> Self {
        Self {
            status: query.status,
            client_id: query.client_id,
            start_date: query.start_date,
            end_date: query.end_date,
        }
    }
}

impl Page<Invoice> {
    pub fn into_dto(self) -> PaginatedInvoicesDto {
        PaginatedInvoicesDto {
            invoices: self.items.into_iter().map(Invoice::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
