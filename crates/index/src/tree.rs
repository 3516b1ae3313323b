//! Height-balanced binary search tree over records
//!
//! The index keys records by `RecordId` and keeps the AVL balance
//! invariant after every insertion: at each node the heights of the two
//! child subtrees differ by at most one. Search and insertion therefore
//! run in O(log n) worst case.
//!
//! # Design Notes
//!
//! - **Owned links**: each node exclusively owns its children through
//!   `Option<Box<Node>>`. Rotations move ownership with `Option::take`,
//!   so a subtree is never duplicated and teardown is the recursive drop
//!   of the root link.
//! - **Replace, not mutate**: insertion rebuilds the affected link at
//!   each level on the unwind path, since a rotation may change which
//!   node roots a subtree (including the tree root itself).
//! - **Records by value**: a node owns its `Record` directly, so nodes
//!   are self-contained and relocation during a rotation never touches
//!   record data.

use roster_core::{Error, Record, RecordId, Result};
use std::cmp::Ordering;
use tracing::trace;

type Link = Option<Box<Node>>;

/// Internal tree node wrapping one record
#[derive(Debug)]
struct Node {
    record: Record,
    left: Link,
    right: Link,
    /// Cached height of the subtree rooted here; a leaf has height 1
    height: u32,
}

impl Node {
    fn new(record: Record) -> Self {
        Node {
            record,
            left: None,
            right: None,
            height: 1,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height_of(&self.left).max(height_of(&self.right));
    }

    /// Balance factor: left subtree height minus right subtree height
    fn balance_factor(&self) -> i32 {
        height_of(&self.left) as i32 - height_of(&self.right) as i32
    }
}

/// Height of a possibly absent subtree; an absent subtree has height 0
fn height_of(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

/// Height-balanced index over records, keyed by `RecordId`
///
/// Supports insertion, exact-key lookup, and sorted full-scan
/// enumeration. Duplicate ids are rejected, not merged: inserting an id
/// that is already present leaves the tree unchanged and returns
/// [`Error::DuplicateId`].
///
/// # Example
///
/// ```
/// use roster_core::{Record, RecordId};
/// use roster_index::BalancedIndex;
///
/// let mut index = BalancedIndex::new();
/// index.insert(Record::new(30, "thirty", 1.0)).unwrap();
/// index.insert(Record::new(10, "ten", 2.0)).unwrap();
///
/// assert_eq!(index.get(RecordId::new(10)).unwrap().name, "ten");
/// assert!(index.get(RecordId::new(99)).is_none());
/// ```
#[derive(Debug, Default)]
pub struct BalancedIndex {
    root: Link,
    len: usize,
}

impl BalancedIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the index
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no records
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; an empty tree has height 0
    ///
    /// Bounded by roughly `1.44 * log2(len + 1)` thanks to the balance
    /// invariant.
    pub fn height(&self) -> u32 {
        height_of(&self.root)
    }

    /// Insert a record keyed by its id
    ///
    /// On success exactly one new node is allocated and every ancestor
    /// on the descent path has its cached height refreshed; the first
    /// ancestor whose balance factor leaves [-1, 1] is corrected with a
    /// single or double rotation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if a record with the same id is
    /// already present. The tree is left untouched and the new record
    /// is discarded.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        insert_link(&mut self.root, record)?;
        self.len += 1;
        Ok(())
    }

    /// Look up a record by exact id
    ///
    /// Ordered binary search costing O(height) comparisons. Absent keys
    /// return `None`; this is not an error.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let mut current = &self.root;
        while let Some(node) = current {
            match id.cmp(&node.record.id) {
                Ordering::Less => current = &node.left,
                Ordering::Greater => current = &node.right,
                Ordering::Equal => return Some(&node.record),
            }
        }
        None
    }

    /// Whether a record with the given id is present
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// All records in strictly increasing id order
    ///
    /// In-order traversal materialized into a `Vec`. The order is fully
    /// determined by the ordering invariant, independent of insertion
    /// order and rotation history.
    pub fn scan_sorted(&self) -> Vec<&Record> {
        let mut out = Vec::with_capacity(self.len);
        in_order(&self.root, &mut out);
        out
    }

    /// Drop every record, releasing all nodes
    ///
    /// Ownership makes release exact: each node is owned by one parent
    /// link, so dropping the root frees the whole structure once,
    /// children before parents.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

/// Recursive ordered insert with rebalancing on the unwind path
///
/// Takes the node out of the link, descends by id comparison, then puts
/// the (possibly rotated) subtree root back. On a duplicate the subtree
/// is restored untouched, heights included.
fn insert_link(link: &mut Link, record: Record) -> Result<()> {
    let Some(mut node) = link.take() else {
        *link = Some(Box::new(Node::new(record)));
        return Ok(());
    };

    let inserted = record.id;
    let result = match inserted.cmp(&node.record.id) {
        Ordering::Less => insert_link(&mut node.left, record),
        Ordering::Greater => insert_link(&mut node.right, record),
        Ordering::Equal => Err(Error::DuplicateId(inserted)),
    };

    if result.is_ok() {
        node.update_height();
        node = rebalance(node, inserted);
    }
    *link = Some(node);
    result
}

/// Apply at most one corrective rotation (or double rotation) at `node`
///
/// The case is chosen by comparing the inserted id against the heavy
/// child's id: equal ids cannot occur here because the insert already
/// descended past that child.
fn rebalance(mut node: Box<Node>, inserted: RecordId) -> Box<Node> {
    let balance = node.balance_factor();

    if balance > 1 {
        let left_id = node
            .left
            .as_ref()
            .expect("left-heavy node has a left child")
            .record
            .id;
        if inserted > left_id {
            // Left-right: straighten the left child first
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        let right_id = node
            .right
            .as_ref()
            .expect("right-heavy node has a right child")
            .record
            .id;
        if inserted < right_id {
            // Right-left: straighten the right child first
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Single right rotation; the left child becomes the subtree root
///
/// Recomputes the heights of exactly the two nodes involved. The cached
/// heights of grandchildren are unaffected by the restructuring.
fn rotate_right(mut root: Box<Node>) -> Box<Node> {
    let mut pivot = root.left.take().expect("right rotation needs a left child");
    trace!(at = %root.record.id, pivot = %pivot.record.id, "right rotation");

    root.left = pivot.right.take();
    root.update_height();
    pivot.right = Some(root);
    pivot.update_height();
    pivot
}

/// Single left rotation; the right child becomes the subtree root
fn rotate_left(mut root: Box<Node>) -> Box<Node> {
    let mut pivot = root.right.take().expect("left rotation needs a right child");
    trace!(at = %root.record.id, pivot = %pivot.record.id, "left rotation");

    root.right = pivot.left.take();
    root.update_height();
    pivot.left = Some(root);
    pivot.update_height();
    pivot
}

fn in_order<'a>(link: &'a Link, out: &mut Vec<&'a Record>) {
    if let Some(node) = link {
        in_order(&node.left, out);
        out.push(&node.record);
        in_order(&node.right, out);
    }
}
