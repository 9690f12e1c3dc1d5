//! Status command handler

use anyhow::Result;

use shelf_core::LibraryStore;

use crate::output::{Output, OutputFormat};

/// Show status information
pub fn show(store: &LibraryStore, output: &Output) -> Result<()> {
    let stats = store.storage_stats();
    let config = store.config();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "storage": {
                        "location": config.data_dir,
                        "library_file": config.library_path(),
                        "library_exists": stats.exists,
                        "library_size": stats.size
                    },
                    "counts": {
                        "books": store.book_count(),
                        "read": store.read_count(),
                        "unread": store.book_count() - store.read_count()
                    }
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", store.book_count());
        }
        OutputFormat::Human => {
            println!("Shelf Status");
            println!("============");
            println!();
            println!("Storage:");
            println!("  Location: {}", config.data_dir.display());
            println!("  File:     {}", config.library_path().display());
            println!("  Size:     {}", stats.size_human());
            println!();
            println!("Contents:");
            println!("  Books:  {}", store.book_count());
            println!("  Read:   {}", store.read_count());
            println!("  Unread: {}", store.book_count() - store.read_count());
        }
    }

    Ok(())
}
