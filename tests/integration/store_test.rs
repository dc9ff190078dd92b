//! Tests for the catalog stores and the boundary adapter, driven through
//! the public API.

use chrono::{TimeZone, Utc};

use vtube::catalog::adapter::videos_from_json;
use vtube::catalog::{Catalog, CatalogError, NewPlaylist, NewVideo, VideoPatch};

// ============================================================================
// CRUD through the bundled catalog
// ============================================================================

#[test]
fn builtin_catalog_loads() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.videos.len() >= 5);
    assert!(!catalog.channels.all().is_empty());
    assert!(!catalog.playlists.all().is_empty());
}

#[test]
fn full_video_lifecycle() {
    let mut catalog = Catalog::builtin().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap();

    let id = catalog
        .videos
        .create(
            NewVideo {
                title: "Brand new upload".to_string(),
                description: "Fresh off the editing bench".to_string(),
                thumbnail: String::new(),
                channel_id: 1,
                channel_name: "Workshop Heroes".to_string(),
                duration: 61.0,
            },
            now,
        )
        .id;

    // Created with zeroed counters and the stamped date
    let created = catalog.videos.get(id).unwrap();
    assert_eq!(created.views, 0);
    assert_eq!(created.upload_date, now);

    // Update via typed patch
    catalog
        .videos
        .update(
            id,
            VideoPatch {
                views: Some(12),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(catalog.videos.get(id).unwrap().views, 12);

    // Delete, then the id is gone
    catalog.videos.delete(id).unwrap();
    assert_eq!(
        catalog.videos.get(id).unwrap_err(),
        CatalogError::VideoNotFound(id)
    );
}

#[test]
fn search_reaches_descriptions_and_channels() {
    let catalog = Catalog::builtin().unwrap();

    let by_channel_name = catalog.videos.search("stack trace");
    assert!(!by_channel_name.is_empty());
    assert!(by_channel_name
        .iter()
        .all(|v| v.channel_name == "Stack Trace"));

    let none = catalog.videos.search("zzzznope");
    assert!(none.is_empty());
}

#[test]
fn related_never_contains_the_watched_video() {
    let catalog = Catalog::builtin().unwrap();
    for video in catalog.videos.all() {
        let related = catalog.videos.related(video.id, 10);
        assert!(related.iter().all(|v| v.id != video.id));
        assert!(related.len() <= 10);
    }
}

#[test]
fn playlist_membership_keeps_count_invariant() {
    let mut catalog = Catalog::builtin().unwrap();
    let id = catalog
        .playlists
        .create(NewPlaylist {
            name: "Weekend queue".to_string(),
            thumbnail: String::new(),
            video_ids: vec![1],
        })
        .id;

    catalog.playlists.add_video(id, 2).unwrap();
    catalog.playlists.add_video(id, 2).unwrap(); // duplicate, no-op
    catalog.playlists.remove_video(id, 1).unwrap();

    let playlist = catalog.playlists.get(id).unwrap();
    assert_eq!(playlist.video_ids, vec![2]);
    assert_eq!(playlist.video_count, 1);
}

#[test]
fn missing_ids_are_typed_errors() {
    let mut catalog = Catalog::builtin().unwrap();
    assert_eq!(
        catalog.videos.get(10_000).unwrap_err(),
        CatalogError::VideoNotFound(10_000)
    );
    assert_eq!(
        catalog.channels.get(10_000).unwrap_err(),
        CatalogError::ChannelNotFound(10_000)
    );
    assert_eq!(
        catalog.playlists.add_video(10_000, 1).unwrap_err(),
        CatalogError::PlaylistNotFound(10_000)
    );
}

// ============================================================================
// Boundary adapter
// ============================================================================

#[test]
fn adapter_maps_external_shape_to_canonical() {
    let json = r#"[{
        "Id": 42,
        "title": "T",
        "description": "D",
        "thumbnail": "th",
        "channelId": 2,
        "channelName": "C",
        "views": 7,
        "likes": 1,
        "dislikes": 0,
        "duration": 30.0,
        "uploadDate": "2025-12-24T18:00:00Z"
    }]"#;
    let videos = videos_from_json(json).unwrap();
    assert_eq!(videos[0].id, 42);
    assert_eq!(videos[0].channel_id, 2);
    assert_eq!(
        videos[0].upload_date,
        Utc.with_ymd_and_hms(2025, 12, 24, 18, 0, 0).unwrap()
    );
}

#[test]
fn adapter_refuses_malformed_payloads() {
    assert!(videos_from_json("not json").is_err());
    assert!(videos_from_json(r#"[{"Id": 1}]"#).is_err());
}
