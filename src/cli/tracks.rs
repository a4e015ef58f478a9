use colored::Colorize;

use super::{catalog, spinner};
use crate::{error, info, warning};

pub async fn track(id: u64) {
    let catalog = catalog();

    let pb = spinner("Fetching track...");
    let result = catalog.fetch_track_by_id(id).await;
    pb.finish_and_clear();

    match result {
        Ok(track) => {
            println!("{} - {}", track.title.bold(), track.artist_name);
            println!("Duration: {}", track.duration_text);
            if track.preview_url.is_empty() {
                warning!("No preview available.");
            } else {
                println!("Preview:  {}", track.preview_url);
            }
            if !track.cover_url.is_empty() {
                println!("Cover:    {}", track.cover_url);
            }
        }
        Err(e) => error!("Cannot fetch track {}. Err: {}", id, e),
    }
}

pub async fn preview(query: String) {
    let catalog = catalog();

    let pb = spinner("Searching preview...");
    let result = catalog.fetch_audio_preview(&query).await;
    pb.finish_and_clear();

    match result {
        Ok(Some(preview)) => {
            println!("Duration: {}", preview.duration_text);
            println!("Preview:  {}", preview.preview_url);
        }
        Ok(None) => info!("No track found for \"{}\".", query),
        Err(e) => error!("Cannot search preview. Err: {}", e),
    }
}
