use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{Res, api, api::ApiState, config, error, types::PkceToken};

/// Serves `/callback` and `/health` for the duration of an OAuth handshake.
pub async fn start_callback_server(state: Arc<Mutex<Option<PkceToken>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback server to {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Callback server stopped: {}", e);
    }
}

/// Routes of the local JSON API.
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/playlists", post(api::playlists))
        .route("/api/analyze-playlist", post(api::analyze_playlist))
        .with_state(state)
}

/// Runs the local JSON API on `addr` until the process is stopped.
pub async fn serve_api(addr: &str, state: ApiState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, api_router(state)).await?;
    Ok(())
}
