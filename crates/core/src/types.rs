//! Core types for the record store
//!
//! This module defines the foundational types:
//! - RecordId: unique integer identifier, the ordering/search key
//! - Record: one tracked entity (id, name, score)

use crate::limits::Limits;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a record
///
/// A RecordId wraps the caller-supplied integer key. It is the ordering
/// key of the balanced index: records are stored, searched, and
/// enumerated by it. RecordIds are unique across a store; inserting a
/// second record with an existing id is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(i64);

impl RecordId {
    /// Create a RecordId from a raw integer
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value of this RecordId
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RecordId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tracked entity
///
/// A Record is immutable once stored: there is no update operation, and
/// the index keeps the record by value inside its node so each node is
/// self-contained.
///
/// The `name` field is clamped to `Limits::max_name_bytes` at
/// construction time. Clamping is silent, not an error, and always cuts
/// on a UTF-8 character boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique ordering/search key
    pub id: RecordId,
    /// Display name, clamped to the configured maximum byte length
    pub name: String,
    /// Performance score; no range constraint is enforced
    pub score: f64,
}

impl Record {
    /// Create a record, clamping the name per the default limits
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, score: f64) -> Self {
        Self::with_limits(id, name, score, &Limits::default())
    }

    /// Create a record, clamping the name per the given limits
    pub fn with_limits(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        score: f64,
        limits: &Limits,
    ) -> Self {
        let mut name = name.into();
        limits.clamp_name(&mut name);
        Record {
            id: id.into(),
            name,
            score,
        }
    }
}
