//! Storage layer
//!
//! Handles persistence of the book library as a single JSON file.
//!
//! The file is the durable copy of the in-memory list: every mutation in the
//! store rewrites it in full, atomically. A missing file means an empty
//! library; an unreadable one is moved aside and treated as empty.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{JsonPersistence, StorageStats};
