//! RosterDB - Embedded in-memory indexed record store
//!
//! RosterDB keeps records keyed by a unique integer id in a
//! height-balanced tree, giving O(log n) insertion and exact-key lookup
//! plus sorted full-scan enumeration. The store is purely transient:
//! nothing is persisted and everything is released when the store is
//! dropped.
//!
//! # Quick Start
//!
//! ```
//! use rosterdb::{Record, RecordId, RecordStore};
//!
//! let mut store = RecordStore::new();
//!
//! // Insert a few records
//! store.insert(Record::new(30, "Ada", 91.5)).unwrap();
//! store.insert(Record::new(10, "Grace", 88.0)).unwrap();
//!
//! // Exact-key lookup
//! let found = store.get(10).unwrap();
//! assert_eq!(found.name, "Grace");
//!
//! // Sorted enumeration
//! let ids: Vec<i64> = store.scan_sorted().iter().map(|r| r.id.as_i64()).collect();
//! assert_eq!(ids, vec![10, 30]);
//! ```
//!
//! # Architecture
//!
//! All algorithmic work happens in the [`roster-index`] crate's
//! balanced tree; [`RecordStore`] is a thin facade that applies the
//! configured [`Limits`] and emits structured tracing events. Internal
//! tree details (nodes, rotations, heights) are not exposed.
//!
//! [`roster-index`]: roster_index

#![warn(missing_docs)]
#![warn(clippy::all)]

use tracing::{debug, warn};

pub use roster_core::{Error, Limits, Record, RecordId, Result};
pub use roster_index::BalancedIndex;

/// In-memory record store keyed by unique integer id
///
/// Thin stateful facade over [`BalancedIndex`]: it owns the tree and
/// its [`Limits`], clamps record names on insert, and logs insertions,
/// duplicate rejections, and scans. Single-threaded by design; every
/// operation runs to completion before returning.
///
/// # Example
///
/// ```
/// use rosterdb::{Record, RecordStore};
///
/// let mut store = RecordStore::new();
/// store.insert(Record::new(1, "Lin", 75.0)).unwrap();
///
/// // A second record under the same id is rejected, not merged
/// assert!(store.insert(Record::new(1, "Nia", 80.0)).is_err());
/// assert_eq!(store.get(1).unwrap().name, "Lin");
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    index: BalancedIndex,
    limits: Limits,
}

impl RecordStore {
    /// Create an empty store with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with custom limits
    pub fn with_limits(limits: Limits) -> Self {
        RecordStore {
            index: BalancedIndex::new(),
            limits,
        }
    }

    /// Insert a record
    ///
    /// The record's name is clamped to this store's limits before it is
    /// handed to the index. On success the index stays height-balanced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] when the id is already present;
    /// the store is left unchanged and the rejection is logged at
    /// `warn` level.
    pub fn insert(&mut self, mut record: Record) -> Result<()> {
        self.limits.clamp_name(&mut record.name);
        let id = record.id;
        match self.index.insert(record) {
            Ok(()) => {
                debug!(id = %id, len = self.index.len(), "record inserted");
                Ok(())
            }
            Err(err) => {
                warn!(id = %id, "duplicate record id rejected");
                Err(err)
            }
        }
    }

    /// Look up a record by exact id
    ///
    /// Returns `None` for absent ids; this is not an error.
    pub fn get(&self, id: impl Into<RecordId>) -> Option<&Record> {
        self.index.get(id.into())
    }

    /// Whether a record with the given id is present
    pub fn contains(&self, id: impl Into<RecordId>) -> bool {
        self.index.contains(id.into())
    }

    /// All records in strictly increasing id order
    ///
    /// Every field is preserved verbatim; formatting for display is the
    /// caller's concern.
    pub fn scan_sorted(&self) -> Vec<&Record> {
        let records = self.index.scan_sorted();
        debug!(len = records.len(), "sorted scan");
        records
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Height of the backing tree; an empty store has height 0
    pub fn height(&self) -> u32 {
        self.index.height()
    }

    /// The limits this store applies on insert
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Release every record
    ///
    /// The store is reusable afterwards. Dropping the store has the
    /// same effect; there is no separate teardown step to call.
    pub fn clear(&mut self) {
        let released = self.index.len();
        self.index.clear();
        debug!(released, "store cleared");
    }
}
