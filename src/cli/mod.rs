//! # CLI Module
//!
//! Command-line front end of Tunechart. Each command builds a [`Catalog`] from
//! the environment, runs one catalog operation behind a spinner and prints the
//! result as a table; `serve` starts the web front end instead.
//!
//! ## Commands
//!
//! - [`chart`] - Top artists and tracks of the current chart
//! - [`track`] - Detail of a single track
//! - [`preview`] - Preview clip of the best match for a query
//! - [`artist`] - Artist profile with ranked tracks
//! - [`search`] - Ranked track search
//! - [`serve`] - Runs the web server
//!
//! ## Usage Patterns
//!
//! ```bash
//! tunechart chart --limit 10
//! tunechart artist 27
//! tunechart search "imagine" --limit 20
//! tunechart serve --open
//! ```

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{catalog::Catalog, error};

mod artists;
mod charts;
mod search;
mod serve;
mod tracks;

pub use artists::artist;
pub use charts::chart;
pub use search::search;
pub use serve::serve;
pub use tracks::{preview, track};

fn catalog() -> Catalog {
    match Catalog::from_env() {
        Ok(catalog) => catalog,
        Err(e) => error!("Cannot create catalog client. Err: {}", e),
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
