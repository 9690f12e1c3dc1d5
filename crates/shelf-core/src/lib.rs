//! Shelf Core Library
//!
//! This crate provides the core functionality for shelf, a personal book
//! library manager. It owns the book collection, its mutation operations,
//! and the JSON file the collection is persisted to between sessions.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = LibraryStore::open()?;
//!
//! // Add a book
//! let book = store.add("Dune", "Frank Herbert", 412, false)?;
//!
//! // Query books
//! let books = store.books();
//!
//! // Mark as read
//! store.set_read(book.id, true)?;
//! ```
//!
//! # Modules
//!
//! - `store`: Library store, the single source of truth (main entry point)
//! - `models`: The `Book` data structure
//! - `storage`: JSON file persistence
//! - `config`: Application configuration

pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::Book;
pub use storage::{JsonPersistence, StorageError, StorageStats};
pub use store::{LibraryError, LibraryStore};
