use chrono::{DateTime, Days, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::enums::InvoiceStatus,
    server::{
        error::AppError,
        model::invoice::{CreateInvoiceParams, InvoiceLine, InvoiceTotals, UpdateInvoiceParams},
        service::invoice::InvoiceService,
    },
};

mod create;
mod delete;
mod update;
mod update_status;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 14, 0, 0).unwrap()
}

fn params(client_id: i32, created_by: i32, now: DateTime<Utc>) -> CreateInvoiceParams {
    let lines = vec![InvoiceLine {
        description: "Contract review".to_string(),
        quantity: 3,
        unit_price_cents: 20_000,
        amount_cents: 60_000,
    }];
    let totals = InvoiceTotals::compute(&lines).unwrap();

    CreateInvoiceParams {
        client_id,
        created_by,
        issue_date: now,
        due_date: now.date_naive().checked_add_days(Days::new(14)).unwrap(),
        lines,
        totals,
        notes: None,
        terms: None,
    }
}
