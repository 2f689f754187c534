//! Invoice repository and the invoice-number sequence store.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    Select, TransactionTrait,
};

use crate::{
    model::enums::InvoiceStatus,
    server::{
        data::is_unique_violation,
        model::{
            identifier::SequentialIdentifier,
            invoice::{
                CreateInvoiceParams, InvoiceFilter, InvoiceLine, InvoiceStatusChange,
                UpdateInvoiceParams,
            },
        },
        service::numbering::{InsertOutcome, SequenceStore},
    },
};

/// An invoice row with its line items.
pub type InvoiceWithItems = (entity::invoice::Model, Vec<entity::invoice_item::Model>);

pub struct InvoiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvoiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::invoice::Model>, DbErr> {
        entity::prelude::Invoice::find_by_id(id).one(self.db).await
    }

    /// Line items of an invoice in insertion order.
    pub async fn find_items(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<entity::invoice_item::Model>, DbErr> {
        entity::prelude::InvoiceItem::find()
            .filter(entity::invoice_item::Column::InvoiceId.eq(invoice_id))
            .order_by_asc(entity::invoice_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets invoices matching `filter` with their client, newest first.
    ///
    /// # Returns
    /// - `Ok((invoices, total))` - Page of invoices with clients and the number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &InvoiceFilter,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(entity::invoice::Model, Option<entity::client::Model>)>,
            u64,
        ),
        DbErr,
    > {
        let query = Self::filtered(filter)
            .order_by_desc(entity::invoice::Column::IssueDate)
            .order_by_desc(entity::invoice::Column::Id);

        let total = query.clone().count(self.db).await?;
        let invoices = query
            .find_also_related(entity::prelude::Client)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok((invoices, total))
    }

    fn filtered(filter: &InvoiceFilter) -> Select<entity::prelude::Invoice> {
        let mut query = entity::prelude::Invoice::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::invoice::Column::Status.eq(status.as_str()));
        }
        if let Some(client_id) = filter.client_id {
            query = query.filter(entity::invoice::Column::ClientId.eq(client_id));
        }
        if let Some(start) = filter.start_date {
            query = query.filter(
                entity::invoice::Column::IssueDate.gte(start.and_time(NaiveTime::MIN).and_utc()),
            );
        }
        if let Some(end) = filter.end_date.and_then(|end| end.succ_opt()) {
            query = query.filter(
                entity::invoice::Column::IssueDate.lt(end.and_time(NaiveTime::MIN).and_utc()),
            );
        }

        query
    }

    /// Applies changes to a draft invoice, replacing its items when new ones are given.
    ///
    /// The update only matches while the invoice is still a draft, so a concurrent
    /// status change wins over an edit.
    ///
    /// # Returns
    /// - `Ok(Some((invoice, items)))` - Updated draft
    /// - `Ok(None)` - No draft invoice with that id
    /// - `Err(DbErr)` - Database error; nothing was changed
    pub async fn update_draft(
        &self,
        params: UpdateInvoiceParams,
    ) -> Result<Option<InvoiceWithItems>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(invoice) = entity::prelude::Invoice::find_by_id(params.id)
            .filter(entity::invoice::Column::Status.eq(InvoiceStatus::Draft.as_str()))
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let mut active: entity::invoice::ActiveModel = invoice.into();
        if let Some(client_id) = params.client_id {
            active.client_id = ActiveValue::Set(client_id);
        }
        if let Some(due_date) = params.due_date {
            active.due_date = ActiveValue::Set(due_date);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        if let Some(terms) = params.terms {
            active.terms = ActiveValue::Set(Some(terms));
        }
        if let Some((_, totals)) = &params.lines {
            active.subtotal_cents = ActiveValue::Set(totals.subtotal_cents);
            active.tax_cents = ActiveValue::Set(totals.tax_cents);
            active.total_cents = ActiveValue::Set(totals.total_cents);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let invoice = active.update(&txn).await?;

        if let Some((lines, _)) = params.lines {
            entity::prelude::InvoiceItem::delete_many()
                .filter(entity::invoice_item::Column::InvoiceId.eq(invoice.id))
                .exec(&txn)
                .await?;
            insert_items(&txn, invoice.id, &lines).await?;
        }

        let items = entity::prelude::InvoiceItem::find()
            .filter(entity::invoice_item::Column::InvoiceId.eq(invoice.id))
            .order_by_asc(entity::invoice_item::Column::Id)
            .all(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some((invoice, items)))
    }

    /// Writes a validated status transition if the invoice still has the status it
    /// was validated against.
    ///
    /// # Returns
    /// - `Ok(true)` - Status changed
    /// - `Ok(false)` - No invoice with that id and the expected status
    /// - `Err(DbErr)` - Database error
    pub async fn update_status(&self, id: i32, change: InvoiceStatusChange) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Invoice::update_many()
            .filter(entity::invoice::Column::Id.eq(id))
            .filter(entity::invoice::Column::Status.eq(change.from.as_str()))
            .col_expr(entity::invoice::Column::Status, Expr::value(change.status.as_str()))
            .col_expr(entity::invoice::Column::UpdatedAt, Expr::value(Utc::now()));

        if let Some(payment_method) = change.payment_method {
            update = update.col_expr(
                entity::invoice::Column::PaymentMethod,
                Expr::value(payment_method),
            );
        }
        if let Some(paid_at) = change.paid_at {
            update = update.col_expr(entity::invoice::Column::PaidAt, Expr::value(paid_at));
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes an invoice and its items if it is still a draft.
    ///
    /// # Returns
    /// - `Ok(true)` - Draft deleted
    /// - `Ok(false)` - No draft invoice with that id
    /// - `Err(DbErr)` - Database error; nothing was deleted
    pub async fn delete_draft(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let exists = entity::prelude::Invoice::find_by_id(id)
            .filter(entity::invoice::Column::Status.eq(InvoiceStatus::Draft.as_str()))
            .count(&txn)
            .await?
            > 0;

        if !exists {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::InvoiceItem::delete_many()
            .filter(entity::invoice_item::Column::InvoiceId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Invoice::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}

async fn insert_items<C: ConnectionTrait>(
    conn: &C,
    invoice_id: i32,
    lines: &[InvoiceLine],
) -> Result<Vec<entity::invoice_item::Model>, DbErr> {
    let mut items = Vec::with_capacity(lines.len());

    for line in lines {
        let item = entity::invoice_item::ActiveModel {
            invoice_id: ActiveValue::Set(invoice_id),
            description: ActiveValue::Set(line.description.clone()),
            quantity: ActiveValue::Set(line.quantity),
            unit_price_cents: ActiveValue::Set(line.unit_price_cents),
            amount_cents: ActiveValue::Set(line.amount_cents),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        items.push(item);
    }

    Ok(items)
}

/// Inserts one new invoice and its items under an allocated `INV-YYYYMM-NNNN` number.
pub struct InvoiceSequenceStore<'a> {
    db: &'a DatabaseConnection,
    params: CreateInvoiceParams,
}

impl<'a> InvoiceSequenceStore<'a> {
    pub fn new(db: &'a DatabaseConnection, params: CreateInvoiceParams) -> Self {
        Self { db, params }
    }
}

#[async_trait]
impl SequenceStore for InvoiceSequenceStore<'_> {
    type Record = InvoiceWithItems;

    async fn max_identifier(&self, period_prefix: &str) -> Result<Option<String>, DbErr> {
        entity::prelude::Invoice::find()
            .select_only()
            .column(entity::invoice::Column::InvoiceNumber)
            .filter(entity::invoice::Column::InvoiceNumber.starts_with(period_prefix))
            .order_by_desc(entity::invoice::Column::InvoiceNumber)
            .into_tuple::<String>()
            .one(self.db)
            .await
    }

    async fn insert(
        &self,
        identifier: &SequentialIdentifier,
        now: DateTime<Utc>,
    ) -> Result<InsertOutcome<Self::Record>, DbErr> {
        let params = &self.params;
        let txn = self.db.begin().await?;

        let inserted = entity::invoice::ActiveModel {
            invoice_number: ActiveValue::Set(identifier.to_string()),
            client_id: ActiveValue::Set(params.client_id),
            issue_date: ActiveValue::Set(params.issue_date),
            due_date: ActiveValue::Set(params.due_date),
            subtotal_cents: ActiveValue::Set(params.totals.subtotal_cents),
            tax_cents: ActiveValue::Set(params.totals.tax_cents),
            total_cents: ActiveValue::Set(params.totals.total_cents),
            status: ActiveValue::Set(InvoiceStatus::Draft.as_str().to_string()),
            payment_method: ActiveValue::Set(None),
            paid_at: ActiveValue::Set(None),
            notes: ActiveValue::Set(params.notes.clone()),
            terms: ActiveValue::Set(params.terms.clone()),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await;

        let invoice = match inserted {
            Ok(invoice) => invoice,
            Err(err) => {
                txn.rollback().await?;
                return if is_unique_violation(&err) {
                    Ok(InsertOutcome::Conflict)
                } else {
                    Err(err)
                };
            }
        };

        match insert_items(&txn, invoice.id, &params.lines).await {
            Ok(items) => {
                txn.commit().await?;
                Ok(InsertOutcome::Inserted((invoice, items)))
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }
}
