use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use spanalyze::api::*;

#[tokio::test]
async fn test_health_reports_version() {
    let Json(body) = health().await;

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "spanalyze");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_playlists_requires_token() {
    let err = playlists(Json(PlaylistsRequest { access_token: None }))
        .await
        .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Access token required");

    let err = playlists(Json(PlaylistsRequest {
        access_token: Some(String::new()),
    }))
    .await
    .unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_analyze_playlist_requires_token_and_id() {
    let cases = [
        (None, Some("pl")),
        (Some("token"), None),
        (Some("token"), Some("")),
    ];

    for (token, playlist_id) in cases {
        let request = AnalyzePlaylistRequest {
            access_token: token.map(str::to_string),
            playlist_id: playlist_id.map(str::to_string),
        };
        let err = analyze_playlist(State(ApiState::default()), Json(request))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Access token and playlist ID required");
    }
}

#[test]
fn test_api_error_response_status() {
    let response = ApiError::new(StatusCode::BAD_REQUEST, "nope").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
