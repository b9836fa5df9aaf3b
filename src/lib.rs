//! # arbors
//!
//! A persistent ordered set for Rust built on structural sharing and
//! path copying.
//!
//! ## Overview
//!
//! The crate provides [`PersistentOrderedSet`](persistent::PersistentOrderedSet),
//! an ordered set over any `Ord` element type with one defining property:
//! cloning a set is a cheap O(1) operation that produces an independent
//! logical value. Mutations copy only the nodes on the path from the root
//! to the affected node and share every untouched subtree with previous
//! versions, so an arbitrary number of historical or sibling versions can
//! coexist cheaply.
//!
//! The set offers the standard ordered-set surface: insert, remove, find,
//! lower/upper bound queries, and bidirectional iteration in sorted
//! order, plus `LinkedList`-style cursors for positional navigation.
//!
//! The tree is deliberately unbalanced; per-operation cost is bounded by
//! the tree height. See the [`persistent`] module for details and
//! trade-offs.
//!
//! ## Feature Flags
//!
//! - `arc`: share subtrees with `std::sync::Arc` instead of `std::rc::Rc`,
//!   making read-only traversal of distinct versions safe across threads
//! - `serde`: `Serialize`/`Deserialize` implementations
//!
//! ## Example
//!
//! ```rust
//! use arbors::prelude::*;
//!
//! let mut set = PersistentOrderedSet::new();
//! set.insert(5);
//! set.insert(3);
//! set.insert(8);
//!
//! let snapshot = set.clone();
//! set.remove(&8);
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
//! assert_eq!(snapshot.iter().copied().collect::<Vec<_>>(), vec![3, 5, 8]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use arbors::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
