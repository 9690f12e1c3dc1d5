//! Unified library interface
//!
//! The `LibraryStore` is the single source of truth for the book collection.
//! It owns the in-memory list and keeps the JSON file on disk consistent with
//! it: every mutating operation rewrites the file before returning.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = LibraryStore::open()?;  // Loads existing library, or starts empty
//!
//! // Add a book
//! let book = store.add("Dune", "Frank Herbert", 412, false)?;
//!
//! // Query books (display order = insertion order)
//! let books = store.books();
//! ```

use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::models::Book;
use crate::storage::{JsonPersistence, StorageError, StorageStats};

/// Errors from library operations
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Title was empty or whitespace-only
    #[error("title must not be empty")]
    EmptyTitle,

    /// Author was empty or whitespace-only
    #[error("author must not be empty")]
    EmptyAuthor,

    /// Page count was zero
    #[error("pages must be a positive number")]
    ZeroPages,

    /// No book with the given id exists
    #[error("no book found with id {0}")]
    BookNotFound(Uuid),

    /// Persistence failure
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The book library store
///
/// Owns the ordered book list (insertion order = display order) and the
/// persistence handler for its on-disk copy. Constructed once per session;
/// all mutation goes through its methods.
pub struct LibraryStore {
    /// The books, in display order
    books: Vec<Book>,
    /// Persistence handler for the library file
    persistence: JsonPersistence,
    /// Configuration
    config: Config,
}

impl LibraryStore {
    /// Open the store using the default configuration
    ///
    /// Loads the persisted library if one exists, otherwise starts empty.
    pub fn open() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::open_with_config(config)?)
    }

    /// Open the store with a specific configuration
    ///
    /// A missing library file yields an empty library. An unreadable one is
    /// backed up and also yields an empty library (logged as a warning).
    pub fn open_with_config(config: Config) -> Result<Self, StorageError> {
        let persistence = JsonPersistence::new(config.clone());
        let books = persistence.load_or_default()?;

        Ok(Self {
            books,
            persistence,
            config,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a new book to the end of the library
    ///
    /// Validates the fields, generates a fresh id, persists, and returns the
    /// new book. Callers are expected to pre-validate form input, but
    /// malformed data is rejected here regardless.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
        read: bool,
    ) -> Result<Book, LibraryError> {
        let title = title.into();
        let author = author.into();

        if title.trim().is_empty() {
            return Err(LibraryError::EmptyTitle);
        }
        if author.trim().is_empty() {
            return Err(LibraryError::EmptyAuthor);
        }
        if pages == 0 {
            return Err(LibraryError::ZeroPages);
        }

        let book = Book::new(title, author, pages, read);
        self.books.push(book.clone());
        self.persist()?;

        Ok(book)
    }

    /// Remove the book with the given id
    ///
    /// Returns the removed book, or `BookNotFound` if no such id exists.
    pub fn remove(&mut self, id: Uuid) -> Result<Book, LibraryError> {
        let idx = self.find_index(id).ok_or(LibraryError::BookNotFound(id))?;
        let book = self.books.remove(idx);
        self.persist()?;

        Ok(book)
    }

    /// Set the read flag of the book with the given id
    ///
    /// The book keeps its identity and position in the list.
    pub fn set_read(&mut self, id: Uuid, read: bool) -> Result<(), LibraryError> {
        let idx = self.find_index(id).ok_or(LibraryError::BookNotFound(id))?;
        self.books[idx].set_read(read);
        self.persist()?;

        Ok(())
    }

    /// Flip the read flag of the book with the given id
    ///
    /// Returns the new value of the flag.
    pub fn toggle_read(&mut self, id: Uuid) -> Result<bool, LibraryError> {
        let idx = self.find_index(id).ok_or(LibraryError::BookNotFound(id))?;
        let read = !self.books[idx].read;
        self.books[idx].set_read(read);
        self.persist()?;

        Ok(read)
    }

    /// Find the position of the book with the given id
    pub fn find_index(&self, id: Uuid) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }

    /// Get a book by id
    pub fn get(&self, id: Uuid) -> Option<&Book> {
        self.find_index(id).map(|idx| &self.books[idx])
    }

    /// All books in display order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the library
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Number of books marked as read
    pub fn read_count(&self) -> usize {
        self.books.iter().filter(|book| book.read).count()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Get statistics about the on-disk library file
    pub fn storage_stats(&self) -> StorageStats {
        self.persistence.stats()
    }

    /// Write the full book list to disk
    ///
    /// Called after every mutation. A failed write surfaces as an error; the
    /// in-memory change it was recording is kept.
    fn persist(&self) -> Result<(), StorageError> {
        self.persistence.save(&self.books)
    }
}
