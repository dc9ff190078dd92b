//! In-memory CRUD stores for the catalog.
//!
//! Stores are plain structs constructed from data and passed explicitly to
//! whatever needs them; there are no global instances. Lookups by id return
//! [`CatalogError`] for missing records, mutations log at debug level.

use chrono::{DateTime, Utc};
use deunicode::deunicode;
use tracing::debug;

use super::{
    CatalogError, Channel, ChannelPatch, NewChannel, NewPlaylist, NewVideo, Playlist, Video,
    VideoPatch,
};

/// Normalize text for search matching: lowercase and ASCII-fold.
fn fold(text: &str) -> String {
    deunicode(&text.to_lowercase())
}

/// Store of videos with search and channel queries.
#[derive(Debug, Clone, Default)]
pub struct VideoStore {
    videos: Vec<Video>,
}

impl VideoStore {
    pub fn new(videos: Vec<Video>) -> Self {
        Self { videos }
    }

    /// All videos in insertion order.
    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&Video, CatalogError> {
        self.videos
            .iter()
            .find(|v| v.id == id)
            .ok_or(CatalogError::VideoNotFound(id))
    }

    /// Add a video. The id is assigned (`max + 1`), the upload timestamp is
    /// stamped with `now`, and all counters start at zero.
    pub fn create(&mut self, new: NewVideo, now: DateTime<Utc>) -> &Video {
        let id = self.next_id();
        debug!(id, title = %new.title, "creating video");
        let index = self.videos.len();
        self.videos.push(Video {
            id,
            title: new.title,
            description: new.description,
            thumbnail: new.thumbnail,
            channel_id: new.channel_id,
            channel_name: new.channel_name,
            views: 0,
            likes: 0,
            dislikes: 0,
            duration: new.duration,
            upload_date: now,
        });
        &self.videos[index]
    }

    pub fn update(&mut self, id: u32, patch: VideoPatch) -> Result<&Video, CatalogError> {
        let video = self
            .videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(CatalogError::VideoNotFound(id))?;
        debug!(id, "updating video");
        patch.apply(video);
        Ok(video)
    }

    pub fn delete(&mut self, id: u32) -> Result<(), CatalogError> {
        let index = self
            .videos
            .iter()
            .position(|v| v.id == id)
            .ok_or(CatalogError::VideoNotFound(id))?;
        debug!(id, "deleting video");
        self.videos.remove(index);
        Ok(())
    }

    /// Case-insensitive, unicode-folded substring search over title,
    /// description, and channel name.
    pub fn search(&self, query: &str) -> Vec<&Video> {
        let needle = fold(query);
        if needle.is_empty() {
            return self.videos.iter().collect();
        }
        self.videos
            .iter()
            .filter(|v| {
                fold(&v.title).contains(&needle)
                    || fold(&v.description).contains(&needle)
                    || fold(&v.channel_name).contains(&needle)
            })
            .collect()
    }

    /// All uploads of a channel, in catalog order.
    pub fn by_channel(&self, channel_id: u32) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.channel_id == channel_id)
            .collect()
    }

    /// Up-next candidates: every video except `id`, up to `limit`.
    pub fn related(&self, id: u32, limit: usize) -> Vec<&Video> {
        self.videos
            .iter()
            .filter(|v| v.id != id)
            .take(limit)
            .collect()
    }

    fn next_id(&self) -> u32 {
        self.videos.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }
}

/// Store of channels.
#[derive(Debug, Clone, Default)]
pub struct ChannelStore {
    channels: Vec<Channel>,
}

impl ChannelStore {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    pub fn all(&self) -> &[Channel] {
        &self.channels
    }

    pub fn get(&self, id: u32) -> Result<&Channel, CatalogError> {
        self.channels
            .iter()
            .find(|c| c.id == id)
            .ok_or(CatalogError::ChannelNotFound(id))
    }

    /// Add a channel with a fresh id and a zero subscriber count.
    pub fn create(&mut self, new: NewChannel) -> &Channel {
        let id = self.channels.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        debug!(id, name = %new.name, "creating channel");
        let index = self.channels.len();
        self.channels.push(Channel {
            id,
            name: new.name,
            avatar: new.avatar,
            banner: new.banner,
            description: new.description,
            subscribers: 0,
        });
        &self.channels[index]
    }

    pub fn update(&mut self, id: u32, patch: ChannelPatch) -> Result<&Channel, CatalogError> {
        let channel = self
            .channels
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CatalogError::ChannelNotFound(id))?;
        debug!(id, "updating channel");
        patch.apply(channel);
        Ok(channel)
    }

    pub fn delete(&mut self, id: u32) -> Result<(), CatalogError> {
        let index = self
            .channels
            .iter()
            .position(|c| c.id == id)
            .ok_or(CatalogError::ChannelNotFound(id))?;
        debug!(id, "deleting channel");
        self.channels.remove(index);
        Ok(())
    }
}

/// Store of playlists.
///
/// Maintains the invariant that `video_count` always equals
/// `video_ids.len()` and that `video_ids` holds no duplicates.
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    pub fn get(&self, id: u32) -> Result<&Playlist, CatalogError> {
        self.playlists
            .iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::PlaylistNotFound(id))
    }

    pub fn create(&mut self, new: NewPlaylist) -> &Playlist {
        let id = self.playlists.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        debug!(id, name = %new.name, "creating playlist");
        let video_count = new.video_ids.len();
        let index = self.playlists.len();
        self.playlists.push(Playlist {
            id,
            name: new.name,
            thumbnail: new.thumbnail,
            video_ids: new.video_ids,
            video_count,
        });
        &self.playlists[index]
    }

    pub fn delete(&mut self, id: u32) -> Result<(), CatalogError> {
        let index = self
            .playlists
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::PlaylistNotFound(id))?;
        debug!(id, "deleting playlist");
        self.playlists.remove(index);
        Ok(())
    }

    /// Append a video to a playlist; adding an id already present is a no-op.
    pub fn add_video(&mut self, playlist_id: u32, video_id: u32) -> Result<&Playlist, CatalogError> {
        let playlist = self.get_mut(playlist_id)?;
        if !playlist.video_ids.contains(&video_id) {
            playlist.video_ids.push(video_id);
            playlist.video_count = playlist.video_ids.len();
        }
        Ok(playlist)
    }

    /// Remove a video from a playlist; removing an absent id is a no-op.
    pub fn remove_video(
        &mut self,
        playlist_id: u32,
        video_id: u32,
    ) -> Result<&Playlist, CatalogError> {
        let playlist = self.get_mut(playlist_id)?;
        playlist.video_ids.retain(|id| *id != video_id);
        playlist.video_count = playlist.video_ids.len();
        Ok(playlist)
    }

    fn get_mut(&mut self, id: u32) -> Result<&mut Playlist, CatalogError> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::PlaylistNotFound(id))
    }
}

/// Per-user collections: watch history, liked videos, watch later.
///
/// Runtime state only; nothing here is persisted between sessions.
#[derive(Debug, Clone, Default)]
pub struct Library {
    history: Vec<u32>,
    liked: Vec<u32>,
    watch_later: Vec<u32>,
}

impl Library {
    pub fn new(history: Vec<u32>, liked: Vec<u32>) -> Self {
        Self {
            history,
            liked,
            watch_later: Vec::new(),
        }
    }

    /// Most recently watched first.
    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn liked(&self) -> &[u32] {
        &self.liked
    }

    pub fn watch_later(&self) -> &[u32] {
        &self.watch_later
    }

    /// Record a watch; the id moves to the front of the history.
    pub fn record_watch(&mut self, video_id: u32) {
        self.history.retain(|id| *id != video_id);
        self.history.insert(0, video_id);
    }

    /// Add to watch later. Returns false if it was already saved.
    pub fn save_watch_later(&mut self, video_id: u32) -> bool {
        if self.watch_later.contains(&video_id) {
            return false;
        }
        self.watch_later.push(video_id);
        true
    }

    /// Toggle liked status. Returns true if the video is now liked.
    pub fn toggle_liked(&mut self, video_id: u32) -> bool {
        if let Some(index) = self.liked.iter().position(|id| *id == video_id) {
            self.liked.remove(index);
            false
        } else {
            self.liked.push(video_id);
            true
        }
    }

    pub fn is_liked(&self, video_id: u32) -> bool {
        self.liked.contains(&video_id)
    }
}

/// The full catalog handed to screens and commands.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub videos: VideoStore,
    pub channels: ChannelStore,
    pub playlists: PlaylistStore,
    pub library: Library,
}
