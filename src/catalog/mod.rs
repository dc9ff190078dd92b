//! Video catalog: canonical data model and in-memory stores.
//!
//! The catalog is organized into submodules:
//! - `adapter`: converts external (camelCase) payloads into the canonical model
//! - `store`: CRUD stores for videos, channels, and playlists
//! - `seed`: embedded sample data and the bundled [`Catalog`]
//!
//! All field names in the canonical model are snake_case; external payload
//! shapes are handled in `adapter` and nowhere else.

pub mod adapter;
pub mod seed;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use store::{Catalog, ChannelStore, Library, PlaylistStore, VideoStore};

/// Errors raised by catalog lookups and mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("video {0} not found")]
    VideoNotFound(u32),
    #[error("channel {0} not found")]
    ChannelNotFound(u32),
    #[error("playlist {0} not found")]
    PlaylistNotFound(u32),
}

/// A single video in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_id: u32,
    pub channel_name: String,
    pub views: u64,
    pub likes: u64,
    pub dislikes: u64,
    /// Length in seconds.
    pub duration: f64,
    pub upload_date: DateTime<Utc>,
}

/// Fields supplied when creating a video; counters and the upload
/// timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_id: u32,
    pub channel_name: String,
    pub duration: f64,
}

/// Partial update for a video. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub dislikes: Option<u64>,
}

impl VideoPatch {
    /// Apply this patch to a video in place.
    pub fn apply(self, video: &mut Video) {
        if let Some(title) = self.title {
            video.title = title;
        }
        if let Some(description) = self.description {
            video.description = description;
        }
        if let Some(thumbnail) = self.thumbnail {
            video.thumbnail = thumbnail;
        }
        if let Some(views) = self.views {
            video.views = views;
        }
        if let Some(likes) = self.likes {
            video.likes = likes;
        }
        if let Some(dislikes) = self.dislikes {
            video.dislikes = dislikes;
        }
    }
}

/// A channel that owns videos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub description: String,
    pub subscribers: u64,
}

/// Fields supplied when creating a channel; the subscriber count starts
/// at zero.
#[derive(Debug, Clone)]
pub struct NewChannel {
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub description: String,
}

/// Partial update for a channel.
#[derive(Debug, Clone, Default)]
pub struct ChannelPatch {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub banner: Option<String>,
    pub description: Option<String>,
    pub subscribers: Option<u64>,
}

impl ChannelPatch {
    /// Apply this patch to a channel in place.
    pub fn apply(self, channel: &mut Channel) {
        if let Some(name) = self.name {
            channel.name = name;
        }
        if let Some(avatar) = self.avatar {
            channel.avatar = avatar;
        }
        if let Some(banner) = self.banner {
            channel.banner = banner;
        }
        if let Some(description) = self.description {
            channel.description = description;
        }
        if let Some(subscribers) = self.subscribers {
            channel.subscribers = subscribers;
        }
    }
}

/// An ordered collection of videos.
///
/// Invariant: `video_count == video_ids.len()` and `video_ids` holds no
/// duplicates. Both are maintained by [`PlaylistStore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: u32,
    pub name: String,
    pub thumbnail: String,
    pub video_ids: Vec<u32>,
    pub video_count: usize,
}

/// Fields supplied when creating a playlist.
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub thumbnail: String,
    pub video_ids: Vec<u32>,
}
