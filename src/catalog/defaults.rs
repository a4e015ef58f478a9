//! Placeholder values substituted for missing or malformed payload fields.
//!
//! Callers compare against these values instead of checking whether a key
//! was present in the upstream payload.

pub const NO_ID: &str = "No ID";
pub const NO_NAME: &str = "No Name";
pub const NO_URL: &str = "No URL";
pub const UNKNOWN_TRACK: &str = "Unknown Track";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const EMPTY_URL: &str = "";

/// Number of chart tracks shown on the index page.
pub const INDEX_TRACK_COUNT: usize = 18;

/// Tracks per row on the index page.
pub const INDEX_ROW_SIZE: usize = 6;

/// Number of results requested from the search endpoint.
pub const SEARCH_LIMIT: usize = 100;
