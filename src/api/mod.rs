//! # API Module
//!
//! HTTP handlers of the local server.
//!
//! ## Endpoints
//!
//! - [`callback`] - `GET /callback`, completes the PKCE handshake started by
//!   [`crate::spotify::auth::authorize`]
//! - [`health`] - `GET /health`, status and version
//! - [`playlists`] - `POST /api/playlists` with `{"access_token": ...}`
//! - [`analyze_playlist`] - `POST /api/analyze-playlist` with
//!   `{"access_token": ..., "playlist_id": ...}`
//!
//! Errors are answered as `{"error": "..."}`. Missing request fields give
//! `400`; Spotify failures pass Spotify's status through, or `500` when
//! there is none.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::config::AnalysisSourceSettings;

mod analyze;
mod callback;
mod health;
mod playlists;

pub use analyze::{AnalyzePlaylistRequest, analyze_playlist};
pub use callback::callback;
pub use health::health;
pub use playlists::{PlaylistsRequest, playlists};

/// Shared by all API handlers. Built once at startup.
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    pub source: Option<AnalysisSourceSettings>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Passes the upstream status through when Spotify answered with one.
    pub fn upstream(err: &reqwest::Error, message: &str) -> Self {
        let status = err
            .status()
            .and_then(|s| StatusCode::from_u16(s.as_u16()).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
