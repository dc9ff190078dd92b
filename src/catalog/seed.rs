//! Embedded sample catalog.
//!
//! The JSON files under `data/` carry the external payload shape and go
//! through the boundary adapter like any other payload would.

use super::adapter::{self, AdapterError};
use super::store::{Catalog, ChannelStore, Library, PlaylistStore, VideoStore};

const VIDEOS_JSON: &str = include_str!("../../data/videos.json");
const CHANNELS_JSON: &str = include_str!("../../data/channels.json");
const PLAYLISTS_JSON: &str = include_str!("../../data/playlists.json");

impl Catalog {
    /// Build the catalog from the embedded sample data.
    ///
    /// History starts with the first five videos and liked videos with the
    /// third through seventh, so the library screens have content out of
    /// the box.
    pub fn builtin() -> Result<Catalog, AdapterError> {
        let videos = adapter::videos_from_json(VIDEOS_JSON)?;
        let channels = adapter::channels_from_json(CHANNELS_JSON)?;
        let playlists = adapter::playlists_from_json(PLAYLISTS_JSON)?;

        let history: Vec<u32> = videos.iter().take(5).map(|v| v.id).collect();
        let liked: Vec<u32> = videos.iter().skip(2).take(5).map(|v| v.id).collect();

        Ok(Catalog {
            videos: VideoStore::new(videos),
            channels: ChannelStore::new(channels),
            playlists: PlaylistStore::new(playlists),
            library: Library::new(history, liked),
        })
    }
}
