use thiserror::Error;

/// Error type for vector and transient operations.
///
/// Every fallible operation reports exactly one of three conditions; all
/// other misuse (indexing through `Index`, broken trie invariants) panics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieVecError {
    /// An index-addressed update named a position at or past the end.
    #[error("index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: u32, len: u32 },

    /// A range operation violated `start <= end <= len`.
    #[error("range {start}..{end} out of bounds (len {len})")]
    RangeOutOfBounds { start: u32, end: u32, len: u32 },

    /// The transient was already frozen; no further mutation is possible.
    #[error("transient is sealed (already frozen)")]
    Sealed,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TrieVecError>;
