use tabled::Table;

use super::{catalog, spinner};
use crate::{error, info, types::SearchTableRow};

pub async fn search(query: String, limit: usize) {
    let catalog = catalog();

    let pb = spinner(&format!("Searching \"{}\"...", query));
    let result = catalog.search_tracks(&query, limit).await;
    pb.finish_and_clear();

    let result = match result {
        Ok(result) => result,
        Err(e) => error!("Search failed. Err: {}", e),
    };

    info!(
        "{} results, showing {}",
        result.total_count,
        result.tracks.len()
    );
    if result.tracks.is_empty() {
        return;
    }

    let rows: Vec<SearchTableRow> = result
        .tracks
        .into_iter()
        .map(|hit| SearchTableRow {
            id: hit.track.id.to_string(),
            title: hit.track.title,
            artist: hit.track.artist_name,
            duration: hit.duration_text,
        })
        .collect();
    println!("{}", Table::new(rows));
}
