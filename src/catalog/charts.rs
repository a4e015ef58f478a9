use serde_json::Value;

use super::{Catalog, normalize};
use crate::{
    errors::FetchError,
    failure,
    types::{ArtistSummary, TrackSummary},
};

impl Catalog {
    async fn fetch_chart(&self) -> Result<Value, FetchError> {
        self.client.get_path("chart", &[]).await
    }

    /// Retrieves the artists of the current chart.
    ///
    /// Returns an empty list when the chart cannot be fetched; the failure is
    /// only logged.
    pub async fn fetch_top_artists(&self) -> Vec<ArtistSummary> {
        match self.fetch_chart().await {
            Ok(chart) => normalize::data_entries(&chart, Some("artists"), "chart artists")
                .iter()
                .map(normalize::normalize_artist)
                .collect(),
            Err(e) => {
                failure!("Failed to fetch top artists: {}", e);
                Vec::new()
            }
        }
    }

    /// Retrieves the first `limit` tracks of the current chart in chart order.
    ///
    /// Returns an empty list when the chart cannot be fetched.
    pub async fn fetch_top_tracks(&self, limit: usize) -> Vec<TrackSummary> {
        match self.fetch_chart().await {
            Ok(chart) => normalize::data_entries(&chart, Some("tracks"), "chart tracks")
                .iter()
                .take(limit)
                .map(normalize::normalize_track)
                .collect(),
            Err(e) => {
                failure!("Failed to fetch top tracks: {}", e);
                Vec::new()
            }
        }
    }
}
