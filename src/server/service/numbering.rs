//! Sequential identifier allocation.
//!
//! Numbers are derived from the greatest identifier already stored for the current
//! period; there is no in-memory counter. Concurrent writers are resolved by the
//! unique index on the identifier column: an insert that loses the race reports a
//! conflict, the sequence is recomputed and the insert retried a bounded number of
//! times.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::server::{
    error::allocation::AllocationError,
    model::identifier::{PeriodKey, SequentialIdentifier},
};

pub const INVOICE_PREFIX: &str = "INV";
pub const CASE_PREFIX: &str = "CASE";

/// Attempts made before a run of conflicts is reported as transient failure.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Result of inserting an owning record under a candidate identifier.
#[derive(Debug)]
pub enum InsertOutcome<T> {
    Inserted(T),
    /// Another record already holds the identifier; nothing was written.
    Conflict,
}

/// Storage holding the identifier-bearing records.
#[async_trait]
pub trait SequenceStore: Send + Sync {
    type Record: Send;

    /// Returns the lexicographically greatest stored identifier starting with `period_prefix`.
    async fn max_identifier(&self, period_prefix: &str) -> Result<Option<String>, DbErr>;

    /// Persists the owning record under `identifier` in a single transaction.
    ///
    /// `now` is the time the identifier's period was taken from and is stored as the
    /// record's creation time. A uniqueness violation on the identifier must roll
    /// back and yield `InsertOutcome::Conflict`; any other failure is returned as an
    /// error.
    async fn insert(
        &self,
        identifier: &SequentialIdentifier,
        now: DateTime<Utc>,
    ) -> Result<InsertOutcome<Self::Record>, DbErr>;
}

#[derive(Debug, Clone, Copy)]
pub struct SequenceAllocator {
    prefix: &'static str,
    max_attempts: u32,
}

impl SequenceAllocator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Allocator for `INV-YYYYMM-NNNN` invoice numbers.
    pub fn invoices() -> Self {
        Self::new(INVOICE_PREFIX)
    }

    /// Allocator for `CASE-YYYYMM-NNNN` case numbers.
    pub fn cases() -> Self {
        Self::new(CASE_PREFIX)
    }

    /// Overrides the attempt limit; at least one attempt is always made.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Computes the identifier following the current maximum of the period containing `now`.
    ///
    /// # Arguments
    /// - `store` - Store to read the current maximum from
    /// - `now` - Creation time; its UTC year and month select the period
    ///
    /// # Returns
    /// - `Ok(SequentialIdentifier)` - Sequence 1 for an empty period, otherwise max + 1
    /// - `Err(AllocationError::MalformedIdentifier)` - Stored maximum does not parse
    /// - `Err(AllocationError::SequenceExhausted)` - Stored maximum is already 9999
    /// - `Err(AllocationError::StoreUnavailable | Store)` - Read failed
    pub async fn next_identifier<S>(
        &self,
        store: &S,
        now: DateTime<Utc>,
    ) -> Result<SequentialIdentifier, AllocationError>
    where
        S: SequenceStore + ?Sized,
    {
        let period = PeriodKey::from_datetime(now);
        let period_prefix = SequentialIdentifier::period_prefix(self.prefix, period);

        let sequence = match store.max_identifier(&period_prefix).await? {
            None => 1,
            Some(value) => {
                let current = SequentialIdentifier::parse(&value)
                    .ok()
                    .filter(|id| id.prefix() == self.prefix && id.period() == period)
                    .ok_or(AllocationError::MalformedIdentifier { value })?;

                current.sequence() + 1
            }
        };

        SequentialIdentifier::new(self.prefix, period, sequence).ok_or_else(|| {
            AllocationError::SequenceExhausted {
                prefix: self.prefix.to_string(),
                period,
            }
        })
    }

    /// Allocates an identifier and inserts the owning record under it.
    ///
    /// Recomputes the identifier from the store after every conflict. A failure
    /// other than a conflict aborts immediately and leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(S::Record)` - Record persisted with a fresh identifier
    /// - `Err(AllocationError::ConflictRetriesExhausted)` - Every attempt conflicted
    /// - `Err(AllocationError)` - See `next_identifier`, or the insert failed
    pub async fn allocate<S>(
        &self,
        store: &S,
        now: DateTime<Utc>,
    ) -> Result<S::Record, AllocationError>
    where
        S: SequenceStore + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let identifier = self.next_identifier(store, now).await?;

            match store.insert(&identifier, now).await? {
                InsertOutcome::Inserted(record) => {
                    tracing::debug!("Allocated {} on attempt {}", identifier, attempt);
                    return Ok(record);
                }
                InsertOutcome::Conflict => {
                    tracing::debug!(
                        "Identifier {} taken concurrently (attempt {}/{})",
                        identifier,
                        attempt,
                        self.max_attempts
                    );
                }
            }
        }

        Err(AllocationError::ConflictRetriesExhausted {
            prefix: self.prefix.to_string(),
            period: PeriodKey::from_datetime(now),
            attempts: self.max_attempts,
        })
    }
}
