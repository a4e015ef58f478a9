use super::{Catalog, normalize};
use crate::{errors::FetchError, types::ArtistProfile, warning};

impl Catalog {
    /// Retrieves an artist profile with the artist's ranked tracks.
    ///
    /// Three kinds of requests are involved: the artist itself, the track list
    /// URL found in the artist payload, and a cover lookup for every listed
    /// track that comes without one. Only the first is required; a missing or
    /// failing track list gives a profile without top tracks, a failing cover
    /// lookup an empty cover.
    ///
    /// # Errors
    ///
    /// Returns the [`FetchError`] of the artist lookup.
    ///
    /// # Example
    ///
    /// ```
    /// let profile = catalog.fetch_artist_profile(27).await?;
    /// println!("{} has {} fans", profile.name, profile.monthly_listeners);
    /// ```
    pub async fn fetch_artist_profile(&self, id: u64) -> Result<ArtistProfile, FetchError> {
        let artist = self.client.get_path(&format!("artist/{}", id), &[]).await?;

        let tracklist = match normalize::tracklist_url(&artist) {
            Some(url) => match self.client.get(url, &[]).await {
                Ok(list) => Some(list),
                Err(e) => {
                    warning!("Track list of artist {} unavailable: {}", id, e);
                    None
                }
            },
            None => None,
        };

        let mut profile = normalize::normalize_artist_profile(&artist, tracklist.as_ref());

        let slots = profile
            .top_tracks
            .iter_mut()
            .map(|track| (track.id, &mut track.cover_url))
            .collect();
        self.fill_missing_covers(slots).await;

        Ok(profile)
    }
}
