//! Persisted session data
//!
//! Everything expensive to rebuild (frequency tables, commonness scores, and
//! the first-guess cache) converts to plain nested data, is bundled per
//! dictionary fingerprint, and goes to a key→blob store as JSON.

mod session;
mod store;

pub use session::{RestoredSession, SessionCache};
pub use store::{BlobStore, DirStore, MemoryStore, StoreError};

use std::fmt;

/// A snapshot that cannot be turned back into live data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// An array or key has the wrong dimensions or content
    Shape(&'static str),
    /// A per-word array does not match the dictionary size
    Length {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// The snapshot describes a different word list
    Mismatch(&'static str),
    /// The bundle was saved for another dictionary
    Fingerprint { expected: String, found: String },
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape(what) => write!(f, "Malformed snapshot: bad {what}"),
            Self::Length {
                what,
                expected,
                found,
            } => write!(f, "Snapshot has {found} {what}, expected {expected}"),
            Self::Mismatch(what) => write!(f, "Snapshot mismatch: {what}"),
            Self::Fingerprint { expected, found } => {
                write!(f, "Snapshot is for dictionary {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for RestoreError {}
