//! Data models for shelf
//!
//! Defines the core data structure: `Book`. Books serialize to plain JSON
//! (id as string, pages as number, read as boolean) so the persisted
//! library file stays readable and stable across versions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book in the user's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Unique identifier, generated at creation and never reused
    pub id: Uuid,
    /// Book title
    pub title: String,
    /// Author name
    pub author: String,
    /// Page count
    pub pages: u32,
    /// Whether the user has finished reading it
    pub read: bool,
}

impl Book {
    /// Create a new book with a freshly generated id
    pub fn new(title: impl Into<String>, author: impl Into<String>, pages: u32, read: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: author.into(),
            pages,
            read,
        }
    }

    /// Create a book with a specific ID (for loading from storage)
    pub fn with_id(
        id: Uuid,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        read: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            pages,
            read,
        }
    }

    /// Update the read flag
    pub fn set_read(&mut self, read: bool) {
        self.read = read;
    }
}
