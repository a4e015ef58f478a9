use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::catalog::defaults::NO_ID;

/// Identifier of a catalog entity, possibly missing from the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CatalogId(pub Option<u64>);

impl CatalogId {
    pub fn new(id: u64) -> Self {
        Self(Some(id))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<u64> {
        self.0
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(id) => write!(f, "{}", id),
            None => f.write_str(NO_ID),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSummary {
    pub id: CatalogId,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub id: CatalogId,
    pub title: String,
    pub artist_name: String,
    pub cover_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackDetail {
    pub id: CatalogId,
    pub title: String,
    pub artist_name: String,
    pub cover_url: String,
    pub preview_url: String,
    pub duration_text: String,
}

/// One entry of an artist's best-ranked tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopTrack {
    pub id: CatalogId,
    pub title: String,
    pub duration_text: String,
    pub play_count: u64,
    pub cover_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub name: String,
    pub monthly_listeners: u64,
    pub header_url: String,
    pub top_tracks: Vec<TopTrack>,
}

/// A search result entry: a track summary plus its formatted duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub track: TrackSummary,
    pub duration_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    pub tracks: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioPreview {
    pub preview_url: String,
    pub duration_text: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub rank: usize,
    pub id: String,
    pub title: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct TopTrackTableRow {
    pub rank: usize,
    pub title: String,
    pub duration: String,
    pub plays: u64,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A user account as persisted: the public profile plus its Argon2 PHC hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}
