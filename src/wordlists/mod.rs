//! Word lists
//!
//! Dictionaries are supplied by the caller as plain text files.

pub mod loader;

pub use loader::{LoadError, load_dictionary};
