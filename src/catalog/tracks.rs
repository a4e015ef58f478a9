use futures::{StreamExt, stream};

use super::{Catalog, defaults::UNKNOWN_TRACK, normalize};
use crate::{
    errors::FetchError,
    types::{AudioPreview, CatalogId, TrackDetail},
    utils::format_long,
    warning,
};

impl Catalog {
    /// Retrieves a single track with its preview URL and `HH:MM:SS` duration.
    ///
    /// When the track payload has no preview, the first hit of a track search
    /// for "title artist" is used instead. A failing fallback search only
    /// leaves the preview empty.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the track lookup itself.
    pub async fn fetch_track_by_id(&self, id: u64) -> Result<TrackDetail, FetchError> {
        let json = self.client.get_path(&format!("track/{}", id), &[]).await?;
        let mut detail = normalize::normalize_track_detail(&json);

        if detail.preview_url.is_empty() && detail.title != UNKNOWN_TRACK {
            let query = format!("{} {}", detail.title, detail.artist_name);
            match self.fetch_audio_preview(&query).await {
                Ok(Some(preview)) => {
                    detail.preview_url = preview.preview_url;
                    if detail.duration_text == format_long(0) {
                        detail.duration_text = preview.duration_text;
                    }
                }
                Ok(None) => {}
                Err(e) => warning!("No preview for track {}: {}", id, e),
            }
        }

        Ok(detail)
    }

    /// Looks up the preview clip and duration of the best match for `query`.
    ///
    /// Returns `Ok(None)` for a blank query or when nothing matches.
    pub async fn fetch_audio_preview(&self, query: &str) -> Result<Option<AudioPreview>, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let params = [("q", query.to_string()), ("limit", "1".to_string())];
        let json = self.client.get_path("search/track", &params).await?;
        Ok(normalize::normalize_audio_preview(&json))
    }

    /// Medium cover of a track, or an empty string if it cannot be resolved.
    pub async fn fetch_cover(&self, id: CatalogId) -> String {
        let Some(id) = id.get() else {
            return String::new();
        };

        match self.client.get_path(&format!("track/{}", id), &[]).await {
            Ok(json) => normalize::cover_url(&json),
            Err(_) => String::new(),
        }
    }

    /// Fills every empty cover slot by looking up its track.
    ///
    /// Lookups run concurrently, at most `self.fanout` at a time, and each
    /// result lands in the slot it was requested for.
    pub(crate) async fn fill_missing_covers(&self, slots: Vec<(CatalogId, &mut String)>) {
        let (ids, targets): (Vec<CatalogId>, Vec<&mut String>) = slots
            .into_iter()
            .filter(|(_, cover)| cover.is_empty())
            .unzip();

        if ids.is_empty() {
            return;
        }

        let covers: Vec<String> = stream::iter(ids)
            .map(|id| self.fetch_cover(id))
            .buffered(self.fanout)
            .collect()
            .await;

        for (target, cover) in targets.into_iter().zip(covers) {
            *target = cover;
        }
    }
}
