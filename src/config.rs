//! Configuration management for Tunechart.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every setting has a default, so the application
//! runs against the public Deezer API without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

/// Default base URL of the catalog API.
pub const DEFAULT_CATALOG_API_URL: &str = "https://api.deezer.com";

/// Default address of the web server.
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Default per-request timeout for catalog calls, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default number of concurrent cover lookups per page.
pub const DEFAULT_FANOUT_LIMIT: usize = 8;

/// Upper bound for the cover lookup concurrency.
pub const MAX_FANOUT_LIMIT: usize = 16;

/// Default lifetime of a login session, in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `tunechart` data directory if it doesn't exist and loads
/// environment variables from `tunechart/.env` inside it. A missing `.env`
/// file is not an error since every setting has a default.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/tunechart/.env`
/// - macOS: `~/Library/Application Support/tunechart/.env`
/// - Windows: `%LOCALAPPDATA%/tunechart/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or the
/// `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the platform-specific data directory of the application.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunechart");
    path
}

/// Returns the address the web server binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `"127.0.0.1:8000"`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the base URL of the catalog API without a trailing slash.
///
/// Reads `CATALOG_API_URL`, e.g. `"https://api.deezer.com"`.
pub fn catalog_api_url() -> String {
    env::var("CATALOG_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_CATALOG_API_URL.to_string())
}

/// Returns the timeout applied to every single catalog request.
///
/// Reads `CATALOG_TIMEOUT_SECS`; zero or unparsable values fall back to the default.
pub fn catalog_timeout() -> Duration {
    let secs = env::var("CATALOG_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns how many cover lookups may run at the same time.
///
/// Reads `CATALOG_FANOUT_LIMIT`, clamped to `1..=16`.
pub fn fanout_limit() -> usize {
    let limit = env::var("CATALOG_FANOUT_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_FANOUT_LIMIT);
    clamp_fanout(limit)
}

/// Clamps a requested concurrency to the supported range.
pub fn clamp_fanout(limit: usize) -> usize {
    limit.clamp(1, MAX_FANOUT_LIMIT)
}

/// Returns the lifetime of a login session.
///
/// Reads `SESSION_TTL_HOURS`.
pub fn session_ttl() -> chrono::Duration {
    let hours = env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|hours| *hours > 0)
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS);
    chrono::Duration::hours(hours)
}

/// Returns where user accounts are persisted.
///
/// Reads `ACCOUNTS_PATH`, defaulting to `accounts.json` in the data directory.
pub fn accounts_path() -> PathBuf {
    env::var("ACCOUNTS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| data_dir().join("accounts.json"))
}

/// Whether `debug!` output is enabled through `TUNECHART_DEBUG`.
pub fn debug_enabled() -> bool {
    env::var_os("TUNECHART_DEBUG").is_some()
}
