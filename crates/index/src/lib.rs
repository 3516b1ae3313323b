//! Balanced index for RosterDB
//!
//! This crate implements the height-balanced (AVL) binary search tree
//! that backs the record store. It guarantees O(log n) worst-case depth
//! for insertion and exact-key search by applying rotation-based
//! rebalancing after every insert.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod tree;

pub use tree::BalancedIndex;
