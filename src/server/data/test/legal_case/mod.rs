use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use tokio::sync::Barrier;

use crate::{
    model::enums::{CaseStatus, Priority},
    server::{
        data::legal_case::{CaseSequenceStore, LegalCaseRepository},
        model::{
            identifier::SequentialIdentifier,
            legal_case::{CaseFilter, CreateCaseParams, UpdateCaseParams},
        },
        service::numbering::{InsertOutcome, SequenceAllocator, SequenceStore},
    },
};

mod allocate;
mod delete;
mod get_paginated;
mod stats;
mod update;

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

fn params(title: &str, now: DateTime<Utc>) -> CreateCaseParams {
    CreateCaseParams {
        title: title.to_string(),
        description: None,
        status: CaseStatus::Active,
        priority: Priority::Medium,
        client_id: None,
        assigned_to: None,
        start_date: now,
        end_date: None,
        notes: None,
    }
}

/// Holds every store at a shared barrier right after its first read, so all
/// writers compute their candidate identifier from the same maximum.
struct BarrierStore<S> {
    inner: S,
    barrier: Arc<Barrier>,
    waited: AtomicBool,
}

impl<S> BarrierStore<S> {
    fn new(inner: S, barrier: Arc<Barrier>) -> Self {
        Self {
            inner,
            barrier,
            waited: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl<S: SequenceStore> SequenceStore for BarrierStore<S> {
    type Record = S::Record;

    async fn max_identifier(&self, period_prefix: &str) -> Result<Option<String>, DbErr> {
        let max = self.inner.max_identifier(period_prefix).await?;
        if !self.waited.swap(true, Ordering::SeqCst) {
            self.barrier.wait().await;
        }
        Ok(max)
    }

    async fn insert(
        &self,
        identifier: &SequentialIdentifier,
        now: DateTime<Utc>,
    ) -> Result<InsertOutcome<Self::Record>, DbErr> {
        self.inner.insert(identifier, now).await
    }
}
