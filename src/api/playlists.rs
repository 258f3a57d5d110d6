use axum::{Json, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{api::ApiError, spotify, warning};

#[derive(Debug, Deserialize)]
pub struct PlaylistsRequest {
    pub access_token: Option<String>,
}

/// `POST /api/playlists` - lists the playlists of the token's owner.
pub async fn playlists(Json(body): Json<PlaylistsRequest>) -> Result<Json<Value>, ApiError> {
    let Some(token) = body.access_token.filter(|t| !t.is_empty()) else {
        return Err(ApiError::new(StatusCode::BAD_REQUEST, "Access token required"));
    };

    match spotify::playlists::get_user_playlists(&token).await {
        Ok(items) => Ok(Json(json!({ "items": items }))),
        Err(e) => {
            warning!("Error fetching playlists: {}", e);
            Err(ApiError::upstream(&e, "Failed to fetch playlists"))
        }
    }
}
