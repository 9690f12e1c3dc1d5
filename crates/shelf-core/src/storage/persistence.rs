//! Library file persistence
//!
//! Handles saving and loading the book library to/from the filesystem.
//! Uses atomic writes (write to temp file, then rename) to prevent corruption.
//!
//! Storage location: `~/.local/share/shelf/` (configurable via `Config`)
//!
//! Files:
//! - `library.json` - The full book list as a JSON array
//! - `library.json.corrupt` - Backup of an unparseable library file, if one
//!   was ever encountered

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::config::Config;
use crate::models::Book;
use crate::storage::error::{StorageError, StorageResult};

/// Persistence layer for the library file
///
/// Provides atomic file operations for saving/loading the book list.
pub struct JsonPersistence {
    config: Config,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a library file exists on disk
    pub fn exists(&self) -> bool {
        self.config.library_path().exists()
    }

    /// Save the book list to disk using atomic write
    ///
    /// This writes to a temporary file first, then renames it to the target
    /// path, so the library file is never left in a partially-written state.
    pub fn save(&self, books: &[Book]) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(books)?;
        let target_path = self.config.library_path();

        atomic_write(&target_path, &bytes)
    }

    /// Load the book list from disk
    ///
    /// Returns `None` if the library file doesn't exist.
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load(&self) -> StorageResult<Option<Vec<Book>>> {
        let path = self.config.library_path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let books: Vec<Book> = serde_json::from_slice(&bytes)?;
        Ok(Some(books))
    }

    /// Load the book list, recovering to an empty library when needed
    ///
    /// A missing file yields an empty list. An unparseable file is moved
    /// aside to `library.json.corrupt` and also yields an empty list, so a
    /// damaged library never prevents startup. Other I/O failures propagate.
    pub fn load_or_default(&self) -> StorageResult<Vec<Book>> {
        let path = self.config.library_path();

        if !path.exists() {
            return Ok(Vec::new());
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        match serde_json::from_slice(&bytes) {
            Ok(books) => Ok(books),
            Err(e) => {
                let backup_path = path.with_extension("json.corrupt");
                warn!(
                    "library file {:?} is unreadable ({}), starting with an empty library",
                    path, e
                );
                match fs::rename(&path, &backup_path) {
                    Ok(()) => warn!("moved unreadable library file to {:?}", backup_path),
                    Err(rename_err) => {
                        warn!("could not back up unreadable library file: {}", rename_err)
                    }
                }
                Ok(Vec::new())
            }
        }
    }

    /// Get storage statistics for the library file
    pub fn stats(&self) -> StorageStats {
        let path = self.config.library_path();
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);

        StorageStats {
            exists: path.exists(),
            size,
        }
    }
}

/// Statistics about the on-disk library file
#[derive(Debug, Clone, Copy)]
pub struct StorageStats {
    /// Whether the library file exists
    pub exists: bool,
    /// Size of the library file in bytes
    pub size: u64,
}

impl StorageStats {
    /// Human-readable size (e.g. "1.2 KB")
    pub fn size_human(&self) -> String {
        format_size(self.size)
    }
}

/// Format a byte count for humans
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
