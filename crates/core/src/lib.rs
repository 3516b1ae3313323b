//! Core types for RosterDB
//!
//! This crate defines the foundational types used throughout the system:
//! - RecordId: Unique integer identifier for records
//! - Record: One tracked entity (id, name, score)
//! - Limits: Size limits and name clamping
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use limits::Limits;
pub use types::{Record, RecordId};
