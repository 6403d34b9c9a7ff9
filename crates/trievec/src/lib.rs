//! Persistent immutable vectors over a bit-partitioned wide trie.
//!
//! A [`Vector`] is an immutable indexed sequence with O(log₃₂ n) random
//! access and update, amortized O(1) append, and full structural sharing
//! between versions: every update returns a new vector that shares all
//! untouched nodes with its predecessor. A [`Transient`] is the mutable
//! companion for batch construction; it edits nodes in place under an
//! ownership token and freezes back into a vector in O(1).
//!
//! ```
//! use trievec::Vector;
//!
//! let v: Vector<i32> = (1..=5).collect();
//! let w = v.push(6);
//!
//! assert_eq!(v.len(), 5);
//! assert_eq!(w.len(), 6);
//! assert_eq!(w[5], 6);
//!
//! let doubled = v.modify(|t| {
//!     for i in 0..5 {
//!         let x = *t.get(i).unwrap();
//!         t.set(i, x * 2).unwrap();
//!     }
//! })
//! .unwrap();
//! assert_eq!(doubled, [2, 4, 6, 8, 10].into_iter().collect());
//! ```
//!
//! Vectors are deeply immutable, so `Vector<T>: Send + Sync` whenever
//! `T: Send + Sync` and reads never need a lock. A `Transient` belongs to
//! one writer at a time, which the `&mut self` receivers enforce.

pub mod error;
pub mod iter;
pub mod transient;
pub mod vector;

mod node;


pub use error::{Result, TrieVecError};
pub use iter::Iter;
pub use transient::Transient;
pub use vector::Vector;

/// Index bits consumed per trie level.
pub const BITS: u32 = 5;

/// Trie fanout: `2^BITS` slots per node.
pub const BRANCHES: u32 = 1 << BITS;

/// Mask extracting one level's sub-index from an element index.
pub const MASK: u32 = BRANCHES - 1;

/// Reserved index meaning "to the end of the vector" in range operations.
pub const END: u32 = u32::MAX;
