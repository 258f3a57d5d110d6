use spanalyze::spotify::playlists::{collect_tracks, playlist_info};
use spanalyze::types::*;

#[test]
fn test_playlist_items_without_track_or_id_are_dropped() {
    let page: PlaylistTracksResponse = serde_json::from_str(
        r#"{
            "next": null,
            "items": [
                { "track": { "id": "a", "name": "Kept", "artists": [{ "name": "X" }],
                             "duration_ms": 1000, "popularity": 10, "album": { "name": "Alb" } } },
                { "track": null },
                { "track": { "id": null, "name": "Local file" } },
                { "track": { "id": "b", "name": "No numbers", "duration_ms": null } }
            ]
        }"#,
    )
    .unwrap();

    let tracks = collect_tracks(page.items);

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].id, "a");
    assert_eq!(tracks[0].primary_artist(), Some("X"));
    assert_eq!(tracks[1].id, "b");
    assert_eq!(tracks[1].duration_ms, 0);
    assert_eq!(tracks[1].popularity, 0);
    assert_eq!(tracks[1].primary_artist(), None);
}

#[test]
fn test_audio_features_response_keeps_nulls() {
    let res: AudioFeaturesResponse = serde_json::from_str(
        r#"{
            "audio_features": [
                { "id": "a", "danceability": 0.5, "energy": 0.6, "speechiness": 0.05,
                  "acousticness": 0.1, "instrumentalness": 0.0, "liveness": 0.12,
                  "valence": 0.8, "tempo": 118.0, "key": 5, "mode": 1,
                  "type": "audio_features" },
                null
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(res.audio_features.len(), 2);
    assert_eq!(res.audio_features[0].as_ref().unwrap().tempo, 118.0);
    assert!(res.audio_features[1].is_none());
}

#[test]
fn test_playlist_info_fills_missing_fields() {
    let playlist: Playlist = serde_json::from_str(
        r#"{ "id": "p", "name": "Mix", "description": null,
             "owner": { "display_name": "me" }, "followers": { "total": 3 } }"#,
    )
    .unwrap();

    let info = playlist_info(&playlist, 12);

    assert_eq!(info.id, "p");
    assert_eq!(info.description, "");
    assert_eq!(info.owner, "me");
    assert_eq!(info.follower_count, 3);
    assert_eq!(info.track_count, 12);
}

#[test]
fn test_report_serializes_empty_features_as_object() {
    let analysis = PlaylistAnalysis {
        playlist: PlaylistInfo {
            id: "p".to_string(),
            name: "Mix".to_string(),
            description: String::new(),
            owner: "me".to_string(),
            follower_count: 0,
            track_count: 0,
        },
        feature_origin: FeatureOrigin::Synthetic,
        analysis: Report::default(),
    };

    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["feature_origin"], "synthetic");
    assert_eq!(json["analysis"]["audio_features"], serde_json::json!({}));
    assert_eq!(json["analysis"]["top_artists"], serde_json::json!([]));
    assert_eq!(json["analysis"]["decades"], serde_json::json!([]));
    assert_eq!(json["analysis"]["basic"]["track_count"], 0);
}
