//! Period-scoped sequential identifiers such as `INV-202401-0001`.
//!
//! An identifier is a pure function of its prefix, period and sequence, so it can
//! always be rebuilt from its parts and parsed back into them.

use chrono::{DateTime, Datelike, Utc};
use std::fmt;
use thiserror::Error;

/// Highest sequence that fits the four digit segment.
pub const MAX_SEQUENCE: u32 = 9999;

/// Calendar month an identifier belongs to, rendered as `YYYYMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeriodKey {
    year: i32,
    month: u32,
}

impl PeriodKey {
    /// Creates a period, rejecting months outside `1..=12` and years outside `0..=9999`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        ((0..=9999).contains(&year) && (1..=12).contains(&month)).then_some(Self { year, month })
    }

    /// Period of the given instant in UTC.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self {
            year: at.year(),
            month: at.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.month)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierParseError {
    #[error("expected PREFIX-YYYYMM-NNNN, got '{0}'")]
    Shape(String),
    #[error("invalid period in '{0}'")]
    Period(String),
    #[error("invalid sequence in '{0}'")]
    Sequence(String),
}

/// `PREFIX-YYYYMM-NNNN` identifier with its parts kept separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequentialIdentifier {
    prefix: String,
    period: PeriodKey,
    sequence: u32,
}

impl SequentialIdentifier {
    /// Builds an identifier; `sequence` must be within `1..=MAX_SEQUENCE`.
    pub fn new(prefix: impl Into<String>, period: PeriodKey, sequence: u32) -> Option<Self> {
        (1..=MAX_SEQUENCE)
            .contains(&sequence)
            .then(|| Self {
                prefix: prefix.into(),
                period,
                sequence,
            })
    }

    /// Parses a stored identifier.
    ///
    /// The prefix must be one or more ASCII uppercase letters, the period exactly six
    /// digits naming a valid month and the sequence exactly four digits, at least 1.
    pub fn parse(value: &str) -> Result<Self, IdentifierParseError> {
        let shape = || IdentifierParseError::Shape(value.to_string());

        let mut parts = value.split('-');
        let (Some(prefix), Some(period), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(shape());
        };

        if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(shape());
        }

        if period.len() != 6 || !period.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentifierParseError::Period(value.to_string()));
        }
        let year: i32 = period[..4]
            .parse()
            .map_err(|_| IdentifierParseError::Period(value.to_string()))?;
        let month: u32 = period[4..]
            .parse()
            .map_err(|_| IdentifierParseError::Period(value.to_string()))?;
        let period = PeriodKey::new(year, month)
            .ok_or_else(|| IdentifierParseError::Period(value.to_string()))?;

        if sequence.len() != 4 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentifierParseError::Sequence(value.to_string()));
        }
        let sequence: u32 = sequence
            .parse()
            .map_err(|_| IdentifierParseError::Sequence(value.to_string()))?;

        Self::new(prefix, period, sequence)
            .ok_or_else(|| IdentifierParseError::Sequence(value.to_string()))
    }

    /// Prefix shared by every identifier of `prefix` in `period`, e.g. `INV-202401-`.
    pub fn period_prefix(prefix: &str, period: PeriodKey) -> String {
        format!("{}-{}-", prefix, period)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn period(&self) -> PeriodKey {
        self.period
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }
}

impl fmt::Display for SequentialIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{:04}", self.prefix, self.period, self.sequence)
    }
}
