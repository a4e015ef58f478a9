//! Conversion of raw catalog payloads into the records in [`crate::types`].
//!
//! Nothing here fails: a missing or wrongly typed field becomes the matching
//! placeholder from [`super::defaults`], a missing list becomes an empty one.

use serde_json::Value;

use super::defaults::{EMPTY_URL, NO_NAME, NO_URL, UNKNOWN_ARTIST, UNKNOWN_TRACK};
use crate::{
    types::{
        ArtistProfile, ArtistSummary, AudioPreview, CatalogId, SearchHit, TopTrack, TrackDetail,
        TrackSummary,
    },
    utils::{format_long, format_short},
    warning,
};

fn str_field<'a>(json: &'a Value, key: &str) -> Option<&'a str> {
    json.get(key).and_then(Value::as_str)
}

fn string_or(json: &Value, key: &str, default: &str) -> String {
    str_field(json, key).unwrap_or(default).to_string()
}

fn nested_string_or(json: &Value, outer: &str, key: &str, default: &str) -> String {
    json.get(outer)
        .map(|inner| string_or(inner, key, default))
        .unwrap_or_else(|| default.to_string())
}

/// Reads an integer that may be encoded as a JSON number or a numeric string.
fn int_field(json: &Value, key: &str) -> Option<i64> {
    match json.get(key)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count_field(json: &Value, key: &str) -> u64 {
    int_field(json, key).map_or(0, |n| n.max(0) as u64)
}

fn seconds_field(json: &Value, key: &str) -> i64 {
    int_field(json, key).unwrap_or_default()
}

/// Id of an entity payload. Negative or non-numeric ids count as missing.
pub fn catalog_id(json: &Value) -> CatalogId {
    match int_field(json, "id") {
        Some(id) if id >= 0 => CatalogId::new(id as u64),
        _ => CatalogId::missing(),
    }
}

/// Returns the entries of a `data` list.
///
/// With a `container`, the list is looked up as `json[container]["data"]` (the
/// chart shape); without one as `json["data"]`. A missing list is logged and
/// treated as empty.
pub fn data_entries<'a>(json: &'a Value, container: Option<&str>, label: &str) -> &'a [Value] {
    let scope = match container {
        Some(key) => json.get(key),
        None => Some(json),
    };

    match scope.and_then(|s| s.get("data")).and_then(Value::as_array) {
        Some(entries) => entries.as_slice(),
        None => {
            warning!("No {} found in response", label);
            &[]
        }
    }
}

/// Medium album cover of a track payload, empty when absent.
pub fn cover_url(json: &Value) -> String {
    nested_string_or(json, "album", "cover_medium", EMPTY_URL)
}

/// URL of the artist's ranked track list, if the payload has one.
pub fn tracklist_url(json: &Value) -> Option<&str> {
    str_field(json, "tracklist").filter(|url| !url.is_empty())
}

/// Chart artist: id, name and medium picture, with `No Name` / `No URL` defaults.
pub fn normalize_artist(json: &Value) -> ArtistSummary {
    ArtistSummary {
        id: catalog_id(json),
        name: string_or(json, "name", NO_NAME),
        avatar_url: string_or(json, "picture_medium", NO_URL),
    }
}

/// Track summary: id, title, artist name and medium album cover.
///
/// A missing cover stays empty so the fan-out can look it up.
pub fn normalize_track(json: &Value) -> TrackSummary {
    TrackSummary {
        id: catalog_id(json),
        title: string_or(json, "title", UNKNOWN_TRACK),
        artist_name: nested_string_or(json, "artist", "name", UNKNOWN_ARTIST),
        cover_url: cover_url(json),
    }
}

/// Track summary plus preview URL and `HH:MM:SS` duration.
pub fn normalize_track_detail(json: &Value) -> TrackDetail {
    let summary = normalize_track(json);
    TrackDetail {
        id: summary.id,
        title: summary.title,
        artist_name: summary.artist_name,
        cover_url: summary.cover_url,
        preview_url: string_or(json, "preview", EMPTY_URL),
        duration_text: format_long(seconds_field(json, "duration")),
    }
}

/// Entry of an artist track list, with `M:SS` duration and `rank` as play count.
pub fn normalize_top_track(json: &Value) -> TopTrack {
    TopTrack {
        id: catalog_id(json),
        title: string_or(json, "title", UNKNOWN_TRACK),
        duration_text: format_short(seconds_field(json, "duration")),
        play_count: count_field(json, "rank"),
        cover_url: cover_url(json),
    }
}

/// Search result entry with an `M:SS` duration.
pub fn normalize_search_hit(json: &Value) -> SearchHit {
    SearchHit {
        track: normalize_track(json),
        duration_text: format_short(seconds_field(json, "duration")),
    }
}

/// Builds an artist profile from the artist payload and its track list.
///
/// `tracklist` is `None` when the artist has no track list or it could not be
/// fetched; the profile then has no top tracks.
pub fn normalize_artist_profile(json: &Value, tracklist: Option<&Value>) -> ArtistProfile {
    let top_tracks = tracklist
        .map(|list| {
            data_entries(list, None, "tracks in artist track list")
                .iter()
                .map(normalize_top_track)
                .collect()
        })
        .unwrap_or_default();

    ArtistProfile {
        name: string_or(json, "name", UNKNOWN_ARTIST),
        monthly_listeners: count_field(json, "nb_fan"),
        header_url: string_or(json, "picture_medium", EMPTY_URL),
        top_tracks,
    }
}

/// Preview of the first hit of a track search, `None` for an empty result.
pub fn normalize_audio_preview(json: &Value) -> Option<AudioPreview> {
    let first = data_entries(json, None, "track search results").first()?;
    Some(AudioPreview {
        preview_url: string_or(first, "preview", EMPTY_URL),
        duration_text: format_long(seconds_field(first, "duration")),
    })
}

