use chrono::{DateTime, Days, TimeZone, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::enums::InvoiceStatus,
    server::{
        data::invoice::{InvoiceRepository, InvoiceSequenceStore},
        error::allocation::AllocationError,
        model::invoice::{
            CreateInvoiceParams, InvoiceFilter, InvoiceLine, InvoiceStatusChange, InvoiceTotals,
            UpdateInvoiceParams,
        },
        service::numbering::SequenceAllocator,
    },
};

mod allocate;
mod delete_draft;
mod get_paginated;
mod update_draft;
mod update_status;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
}

fn line(description: &str, quantity: i32, unit_price_cents: i64) -> InvoiceLine {
    InvoiceLine {
        description: description.to_string(),
        quantity,
        unit_price_cents,
        amount_cents: i64::from(quantity) * unit_price_cents,
    }
}

fn params(client_id: i32, created_by: i32, now: DateTime<Utc>) -> CreateInvoiceParams {
    let lines = vec![line("Consultation", 2, 15_000), line("Filing fee", 1, 5_050)];
    let totals = InvoiceTotals::compute(&lines).unwrap();

    CreateInvoiceParams {
        client_id,
        created_by,
        issue_date: now,
        due_date: now.date_naive().checked_add_days(Days::new(30)).unwrap(),
        lines,
        totals,
        notes: None,
        terms: Some("Net 30".to_string()),
    }
}

async fn invoice_count(db: &sea_orm::DatabaseConnection) -> Result<u64, DbErr> {
    entity::prelude::Invoice::find().count(db).await
}
