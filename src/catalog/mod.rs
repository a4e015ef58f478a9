//! # Catalog Integration Module
//!
//! This module is the integration layer between Tunechart and the public Deezer
//! catalog API. Pages and CLI commands only ever talk to [`Catalog`]; it issues
//! the HTTP calls, normalizes the loosely shaped JSON answers and computes the
//! derived fields (formatted durations, cover URLs, list slicing).
//!
//! ## Architecture
//!
//! ```text
//! Web pages / CLI commands
//!          ↓
//! Catalog facade
//!     ├── Charts   (top artists, top tracks)
//!     ├── Tracks   (track detail, audio preview, cover lookups)
//!     ├── Artists  (profile + ranked track list)
//!     └── Search   (ranked track search)
//!          ↓
//! Normalizer (defaults for missing fields) + duration formatting
//!          ↓
//! CatalogClient (reqwest, per-request timeout)
//!          ↓
//! Deezer API
//! ```
//!
//! ## Failure Policy
//!
//! Listing operations ([`Catalog::fetch_top_artists`],
//! [`Catalog::fetch_top_tracks`]) never fail: an upstream problem is logged and
//! an empty list returned so the page still renders. Lookups of a single entity
//! and searches return a [`FetchError`] the caller renders as an error view.
//!
//! ## Fan-out
//!
//! Artist profiles and search results may need one extra request per track to
//! find its cover. Those lookups run concurrently, at most `fanout` at a time,
//! and their results are joined in input order.
//!
//! ## API Coverage
//!
//! - `GET /chart`
//! - `GET /track/{id}`
//! - `GET /artist/{id}` and the artist's `tracklist` URL
//! - `GET /search?q=&limit=&order=RANKING`
//! - `GET /search/track?q=&limit=1`

use std::time::Duration;

use crate::{config, errors::FetchError};

pub mod artists;
pub mod charts;
pub mod client;
pub mod defaults;
pub mod normalize;
pub mod search;
pub mod tracks;

pub use client::CatalogClient;

/// Entry point for all catalog operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    client: CatalogClient,
    fanout: usize,
}

impl Catalog {
    /// Creates a catalog for `base_url` with a per-request `timeout` and at
    /// most `fanout` concurrent cover lookups (clamped to `1..=16`).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ConnectionFailed`] if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        fanout: usize,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client: CatalogClient::new(base_url, timeout)?,
            fanout: config::clamp_fanout(fanout),
        })
    }

    /// Creates a catalog from the environment configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::ConnectionFailed`] if the HTTP client cannot be built.
    pub fn from_env() -> Result<Self, FetchError> {
        Self::new(
            config::catalog_api_url(),
            config::catalog_timeout(),
            config::fanout_limit(),
        )
    }

    /// Number of cover lookups allowed in flight at once.
    pub fn fanout(&self) -> usize {
        self.fanout
    }
}
