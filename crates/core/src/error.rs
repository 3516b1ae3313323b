//! Error types for the record store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! Absent keys are not errors: lookups return `Option`. Allocation
//! failure has no variant either; the design provides no fallback
//! allocator, so the process aborts through the global allocator's
//! out-of-memory path.

use crate::types::RecordId;
use thiserror::Error;

/// Result type alias for record store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Insertion attempted with an id already present in the index.
    /// Recoverable: the tree is left unchanged and the new record is
    /// discarded.
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),
}
