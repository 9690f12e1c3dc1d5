//! shelf CLI
//!
//! Command-line interface for shelf - personal book library management.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shelf_core::{Config, LibraryStore};

mod commands;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Shelf - personal book library management")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book to the library
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Page count
        pages: u32,
        /// Mark the book as already read
        #[arg(long)]
        read: bool,
    },
    /// List all books
    #[command(alias = "ls")]
    List,
    /// Show book details
    Show {
        /// Book ID (full UUID or prefix)
        id: String,
    },
    /// Mark a book as read
    Read {
        /// Book ID (full UUID or prefix)
        id: String,
    },
    /// Mark a book as not read
    Unread {
        /// Book ID (full UUID or prefix)
        id: String,
    },
    /// Remove a book from the library
    #[command(alias = "rm")]
    Remove {
        /// Book ID (full UUID or prefix)
        id: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show status (storage location, book counts)
    Status,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    init_logging();

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    // Open store for commands that need it
    let mut store = LibraryStore::open()?;
    tracing::debug!("library loaded with {} book(s)", store.book_count());

    match cli.command {
        Commands::Add {
            title,
            author,
            pages,
            read,
        } => commands::book::add(&mut store, title, author, pages, read, &output),
        Commands::List => commands::book::list(&store, &output),
        Commands::Show { id } => commands::book::show(&store, id, &output),
        Commands::Read { id } => commands::book::set_read(&mut store, id, true, &output),
        Commands::Unread { id } => commands::book::set_read(&mut store, id, false, &output),
        Commands::Remove { id } => commands::book::remove(&mut store, id, &output),
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}

/// Initialize logging
///
/// Only initializes if the SHELF_LOG environment variable is set.
/// Logs to config.log_file when configured, stderr otherwise.
fn init_logging() {
    // Only log if SHELF_LOG is set
    let Ok(log_level) = std::env::var("SHELF_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!("shelf_core={},shelf_cli={}", log_level, log_level));

    let log_file = Config::load().ok().and_then(|config| config.log_file);

    match log_file {
        Some(log_path) => {
            let log_file = match File::create(&log_path) {
                Ok(f) => f,
                Err(e) => {
                    eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
                    return;
                }
            };

            // Ignore error if already initialized
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
