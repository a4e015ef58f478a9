//! Tunechart Library
//!
//! This library provides the pieces behind the `tunechart` binary: a client for
//! the public Deezer catalog API that turns loosely shaped JSON into stable
//! records, a small web front end rendering those records as HTML pages, a
//! local account and session store guarding the pages, and the command-line
//! commands that expose the same catalog operations in a terminal.
//!
//! # Modules
//!
//! - `api` - HTTP handlers and HTML views of the web front end
//! - `catalog` - Catalog API client, response normalization and the facade
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Typed error taxonomies
//! - `management` - Account and session management
//! - `server` - Router assembly and the web server entry point
//! - `types` - Data structures and type definitions
//! - `utils` - Duration formatting and credential helpers
//!
//! # Example
//!
//! ```
//! use tunechart::{catalog::Catalog, config};
//!
//! #[tokio::main]
//! async fn main() -> tunechart::Res<()> {
//!     config::load_env().await?;
//!     let catalog = Catalog::from_env()?;
//!     let artists = catalog.fetch_top_artists().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod server;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by startup, configuration and persistence code where the caller only
/// needs to report the failure. Catalog operations return the typed
/// [`errors::FetchError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup errors. Request handling code reports failures with
/// [`failure!`] and carries on.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a non-fatal error message with a red cross.
///
/// Used where an operation failed but the program keeps running, e.g. an
/// upstream request behind a page that still renders.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("Response from {} has no `data` list", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed diagnostic message when `TUNECHART_DEBUG` is set.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::config::debug_enabled() {
      use colored::Colorize;
      eprintln!("[{}] {}", "d".dimmed(), std::format_args!($($arg)*));
    }
  })
}
