use colored::Colorize;
use tabled::Table;

use super::{catalog, spinner};
use crate::{error, info, types::TopTrackTableRow};

pub async fn artist(id: u64) {
    let catalog = catalog();

    let pb = spinner("Fetching artist profile...");
    let result = catalog.fetch_artist_profile(id).await;
    pb.finish_and_clear();

    let profile = match result {
        Ok(profile) => profile,
        Err(e) => error!("Cannot fetch artist {}. Err: {}", id, e),
    };

    println!(
        "{} ({} monthly listeners)",
        profile.name.bold(),
        profile.monthly_listeners
    );

    if profile.top_tracks.is_empty() {
        info!("No top tracks available.");
        return;
    }

    let rows: Vec<TopTrackTableRow> = profile
        .top_tracks
        .into_iter()
        .enumerate()
        .map(|(i, t)| TopTrackTableRow {
            rank: i + 1,
            title: t.title,
            duration: t.duration_text,
            plays: t.play_count,
        })
        .collect();
    println!("{}", Table::new(rows));
}
