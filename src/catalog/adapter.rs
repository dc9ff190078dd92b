//! Boundary adapter for external catalog payloads.
//!
//! External records use the upstream wire shape: a capitalized `Id` field
//! and camelCase names (`channelName`, `uploadDate`, ...). This module is
//! the only place that shape is known; everything past it works with the
//! canonical snake_case model from [`crate::catalog`].

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::{Channel, Playlist, Video};

/// Errors raised while decoding external payloads.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("invalid catalog payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid upload date {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// External video record as delivered by the upstream service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel_id: u32,
    pub channel_name: String,
    pub views: u64,
    pub likes: u64,
    pub dislikes: u64,
    pub duration: f64,
    /// RFC 3339 timestamp string.
    pub upload_date: String,
}

impl VideoRecord {
    /// Convert into the canonical model, parsing the upload timestamp.
    pub fn into_video(self) -> Result<Video, AdapterError> {
        let upload_date = parse_timestamp(&self.upload_date)?;
        Ok(Video {
            id: self.id,
            title: self.title,
            description: self.description,
            thumbnail: self.thumbnail,
            channel_id: self.channel_id,
            channel_name: self.channel_name,
            views: self.views,
            likes: self.likes,
            dislikes: self.dislikes,
            duration: self.duration,
            upload_date,
        })
    }
}

/// External channel record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub avatar: String,
    pub banner: String,
    pub description: String,
    pub subscribers: u64,
}

impl ChannelRecord {
    pub fn into_channel(self) -> Channel {
        Channel {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
            banner: self.banner,
            description: self.description,
            subscribers: self.subscribers,
        }
    }
}

/// External playlist record.
///
/// The upstream shape carries a denormalized `videoCount`; it is ignored
/// here and recomputed from `videoIds` so the count invariant holds no
/// matter what the payload claims.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRecord {
    #[serde(rename = "Id")]
    pub id: u32,
    pub name: String,
    pub thumbnail: String,
    #[serde(default)]
    pub video_ids: Vec<u32>,
}

impl PlaylistRecord {
    pub fn into_playlist(self) -> Playlist {
        let video_count = self.video_ids.len();
        Playlist {
            id: self.id,
            name: self.name,
            thumbnail: self.thumbnail,
            video_ids: self.video_ids,
            video_count,
        }
    }
}

/// Decode a JSON array of external video records into canonical videos.
pub fn videos_from_json(json: &str) -> Result<Vec<Video>, AdapterError> {
    let records: Vec<VideoRecord> = serde_json::from_str(json)?;
    records.into_iter().map(VideoRecord::into_video).collect()
}

/// Decode a JSON array of external channel records.
pub fn channels_from_json(json: &str) -> Result<Vec<Channel>, AdapterError> {
    let records: Vec<ChannelRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(ChannelRecord::into_channel).collect())
}

/// Decode a JSON array of external playlist records.
pub fn playlists_from_json(json: &str) -> Result<Vec<Playlist>, AdapterError> {
    let records: Vec<PlaylistRecord> = serde_json::from_str(json)?;
    Ok(records
        .into_iter()
        .map(PlaylistRecord::into_playlist)
        .collect())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, AdapterError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| AdapterError::Timestamp {
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_JSON: &str = r#"[{
        "Id": 3,
        "title": "A title",
        "description": "A description",
        "thumbnail": "https://example.com/t.jpg",
        "channelId": 7,
        "channelName": "A channel",
        "views": 100,
        "likes": 10,
        "dislikes": 1,
        "duration": 93.0,
        "uploadDate": "2026-01-21T14:15:00Z"
    }]"#;

    #[test]
    fn decodes_camel_case_video() {
        let videos = videos_from_json(VIDEO_JSON).unwrap();
        assert_eq!(videos.len(), 1);
        let v = &videos[0];
        assert_eq!(v.id, 3);
        assert_eq!(v.channel_id, 7);
        assert_eq!(v.channel_name, "A channel");
        assert_eq!(v.upload_date.to_rfc3339(), "2026-01-21T14:15:00+00:00");
    }

    #[test]
    fn rejects_bad_timestamp() {
        let json = VIDEO_JSON.replace("2026-01-21T14:15:00Z", "yesterday");
        let err = videos_from_json(&json).unwrap_err();
        assert!(matches!(err, AdapterError::Timestamp { .. }));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn rejects_snake_case_payload() {
        // The adapter accepts exactly one external shape; snake_case input
        // is not silently tolerated.
        let json = VIDEO_JSON
            .replace("channelId", "channel_id")
            .replace("channelName", "channel_name")
            .replace("uploadDate", "upload_date");
        assert!(videos_from_json(&json).is_err());
    }

    #[test]
    fn playlist_count_recomputed() {
        let json = r#"[{
            "Id": 1,
            "name": "Mix",
            "thumbnail": "t",
            "videoIds": [4, 5, 6],
            "videoCount": 99
        }]"#;
        let playlists = playlists_from_json(json).unwrap();
        assert_eq!(playlists[0].video_count, 3);
    }

    #[test]
    fn channel_round_trip() {
        let json = r#"[{
            "Id": 2,
            "name": "Chan",
            "avatar": "a",
            "banner": "b",
            "description": "d",
            "subscribers": 12
        }]"#;
        let channels = channels_from_json(json).unwrap();
        assert_eq!(channels[0].id, 2);
        assert_eq!(channels[0].subscribers, 12);
    }
}
