//! Invoicing: numbered creation, draft-only edits and status transitions.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::enums::InvoiceStatus,
    server::{
        data::{
            client::ClientRepository,
            invoice::{InvoiceRepository, InvoiceSequenceStore, InvoiceWithItems},
            team_member::TeamMemberRepository,
        },
        error::AppError,
        model::{
            invoice::{
                CreateInvoiceParams, Invoice, InvoiceDetails, InvoiceFilter, InvoiceItem,
                InvoiceStatusChange, UpdateInvoiceParams,
            },
            Page,
        },
        service::numbering::SequenceAllocator,
    },
};

const NOT_DRAFT: &str = "Only draft invoices can be modified";
const STATUS_CHANGED: &str = "Invoice status changed meanwhile, reload and try again";

pub struct InvoiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft invoice and its items under the next `INV-YYYYMM-NNNN` number.
    ///
    /// # Arguments
    /// - `params` - Validated invoice with computed totals
    /// - `now` - Creation time selecting the numbering period
    ///
    /// # Returns
    /// - `Ok(InvoiceDetails)` - Created invoice with items, client and creator
    /// - `Err(AppError::BadRequest)` - Unknown client
    /// - `Err(AppError::AllocationErr)` - No invoice number could be allocated
    pub async fn create(
        &self,
        params: CreateInvoiceParams,
        now: DateTime<Utc>,
    ) -> Result<InvoiceDetails, AppError> {
        self.ensure_client(params.client_id).await?;

        let store = InvoiceSequenceStore::new(self.db, params);
        let (invoice, items) = SequenceAllocator::invoices().allocate(&store, now).await?;

        tracing::info!(
            "Created invoice {} for client {}",
            invoice.invoice_number,
            invoice.client_id
        );

        self.details((invoice, items)).await
    }

    /// Invoices matching `filter`, newest first, with client names.
    pub async fn get_paginated(
        &self,
        filter: &InvoiceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Invoice>, AppError> {
        let (invoices, total) = InvoiceRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?;

        let invoices = invoices
            .into_iter()
            .map(|(invoice, client)| Invoice::from_joined(invoice, client.as_ref(), None))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(invoices, total, page, per_page))
    }

    pub async fn get(&self, id: i32) -> Result<Option<InvoiceDetails>, AppError> {
        let repo = InvoiceRepository::new(self.db);

        let Some(invoice) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let items = repo.find_items(id).await?;

        Ok(Some(self.details((invoice, items)).await?))
    }

    /// Edits a draft invoice.
    ///
    /// # Returns
    /// - `Ok(Some(InvoiceDetails))` - Updated invoice
    /// - `Ok(None)` - No invoice with that id
    /// - `Err(AppError::BadRequest)` - Invoice is no longer a draft, or unknown client
    pub async fn update(
        &self,
        params: UpdateInvoiceParams,
    ) -> Result<Option<InvoiceDetails>, AppError> {
        let repo = InvoiceRepository::new(self.db);

        let Some(existing) = repo.find_by_id(params.id).await? else {
            return Ok(None);
        };
        if existing.status.parse::<InvoiceStatus>()? != InvoiceStatus::Draft {
            return Err(AppError::BadRequest(NOT_DRAFT.to_string()));
        }
        if let Some(client_id) = params.client_id {
            self.ensure_client(client_id).await?;
        }

        match repo.update_draft(params).await? {
            Some(updated) => Ok(Some(self.details(updated).await?)),
            None => Err(AppError::BadRequest(NOT_DRAFT.to_string())),
        }
    }

    /// Moves an invoice to `next`, recording the payment when it becomes `paid`.
    ///
    /// # Returns
    /// - `Ok(Some(InvoiceDetails))` - Updated invoice
    /// - `Ok(None)` - No invoice with that id
    /// - `Err(AppError::BadRequest)` - Transition not allowed, payment method missing,
    ///   or the status changed while the request was being handled
    pub async fn update_status(
        &self,
        id: i32,
        next: InvoiceStatus,
        payment_method: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Option<InvoiceDetails>, AppError> {
        let repo = InvoiceRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let current = existing.status.parse::<InvoiceStatus>()?;

        let change = InvoiceStatusChange::validate(current, next, payment_method, now)
            .map_err(AppError::BadRequest)?;

        if !repo.update_status(id, change).await? {
            return Err(AppError::BadRequest(STATUS_CHANGED.to_string()));
        }
        let Some(invoice) = repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let items = repo.find_items(id).await?;

        tracing::info!(
            "Invoice {} moved from {} to {}",
            invoice.invoice_number,
            current,
            next
        );

        Ok(Some(self.details((invoice, items)).await?))
    }

    /// Deletes a draft invoice and its items.
    ///
    /// The number is not reserved; it is only handed out again if it was the
    /// highest of its month.
    ///
    /// # Returns
    /// - `Ok(true)` - Draft deleted
    /// - `Ok(false)` - No invoice with that id
    /// - `Err(AppError::BadRequest)` - Invoice is no longer a draft
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = InvoiceRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(false);
        };
        if existing.status.parse::<InvoiceStatus>()? != InvoiceStatus::Draft
            || !repo.delete_draft(id).await?
        {
            return Err(AppError::BadRequest(NOT_DRAFT.to_string()));
        }

        Ok(true)
    }

    async fn details(
        &self,
        (invoice, items): InvoiceWithItems,
    ) -> Result<InvoiceDetails, AppError> {
        let client = ClientRepository::new(self.db)
            .find_by_id(invoice.client_id)
            .await?;
        let creator = TeamMemberRepository::new(self.db)
            .find_by_id(invoice.created_by)
            .await?;

        Ok(InvoiceDetails {
            invoice: Invoice::from_joined(invoice, client.as_ref(), creator.as_ref())?,
            items: items.into_iter().map(InvoiceItem::from_entity).collect(),
        })
    }

    async fn ensure_client(&self, client_id: i32) -> Result<(), AppError> {
        if ClientRepository::new(self.db).exists(client_id).await? {
            Ok(())
        } else {
            Err(AppError::BadRequest(format!(
                "Client {} does not exist",
                client_id
            )))
        }
    }
}
