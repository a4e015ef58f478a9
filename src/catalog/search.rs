use super::{Catalog, normalize};
use crate::{errors::FetchError, types::SearchResult};

impl Catalog {
    /// Searches tracks ordered by ranking and keeps the first `limit` hits.
    ///
    /// `total_count` is the upstream total, which may exceed the number of
    /// returned hits. Hits without an inline cover get one through the bounded
    /// cover fan-out. A blank query returns an empty result without a request.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the search request.
    pub async fn search_tracks(&self, query: &str, limit: usize) -> Result<SearchResult, FetchError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(SearchResult::default());
        }

        let params = [
            ("q", query.to_string()),
            ("limit", limit.to_string()),
            ("order", "RANKING".to_string()),
        ];
        let json = self.client.get_path("search", &params).await?;

        let mut tracks: Vec<_> = normalize::data_entries(&json, None, "search results")
            .iter()
            .take(limit)
            .map(normalize::normalize_search_hit)
            .collect();

        let slots = tracks
            .iter_mut()
            .map(|hit| (hit.track.id, &mut hit.track.cover_url))
            .collect();
        self.fill_missing_covers(slots).await;

        Ok(SearchResult {
            total_count: json
                .get("total")
                .and_then(serde_json::Value::as_u64)
                .unwrap_or_default(),
            tracks,
        })
    }
}
