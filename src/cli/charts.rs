use tabled::Table;

use super::{catalog, spinner};
use crate::{
    types::{ArtistTableRow, TrackTableRow},
    warning,
};

/// Prints the chart artists and the first `limit` chart tracks.
///
/// An unreachable catalog only produces empty tables and a warning, matching
/// what the index page shows in the same situation.
pub async fn chart(limit: usize) {
    let catalog = catalog();

    let pb = spinner("Fetching chart...");
    let (artists, tracks) = tokio::join!(
        catalog.fetch_top_artists(),
        catalog.fetch_top_tracks(limit)
    );
    pb.finish_and_clear();

    if artists.is_empty() && tracks.is_empty() {
        warning!("The chart is empty or could not be fetched.");
        return;
    }

    let artist_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            rank: i + 1,
            id: a.id.to_string(),
            name: a.name,
        })
        .collect();
    println!("{}", Table::new(artist_rows));

    let track_rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            id: t.id.to_string(),
            title: t.title,
            artist: t.artist_name,
        })
        .collect();
    println!("{}", Table::new(track_rows));
}
