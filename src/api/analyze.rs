use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::{
    api::{ApiError, ApiState},
    pipeline,
    types::PlaylistAnalysis,
    warning,
};

#[derive(Debug, Deserialize)]
pub struct AnalyzePlaylistRequest {
    pub access_token: Option<String>,
    pub playlist_id: Option<String>,
}

/// `POST /api/analyze-playlist` - fetches a playlist and returns its analysis.
pub async fn analyze_playlist(
    State(state): State<ApiState>,
    Json(body): Json<AnalyzePlaylistRequest>,
) -> Result<Json<PlaylistAnalysis>, ApiError> {
    let token = body.access_token.filter(|t| !t.is_empty());
    let playlist_id = body.playlist_id.filter(|p| !p.is_empty());
    let (Some(token), Some(playlist_id)) = (token, playlist_id) else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Access token and playlist ID required",
        ));
    };

    match pipeline::analyze_playlist(&token, &playlist_id, state.source.clone()).await {
        Ok(analysis) => Ok(Json(analysis)),
        Err(e) => {
            warning!("Error analyzing playlist {}: {}", playlist_id, e);
            Err(ApiError::upstream(&e, "Failed to analyze playlist"))
        }
    }
}
