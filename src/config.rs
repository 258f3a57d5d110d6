//! Configuration management for the playlist analyzer.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The Spotify settings are required by every command that talks to Spotify.
//! The analysis source is optional; without `ANALYSIS_API_URL` audio features
//! that Spotify cannot provide are generated synthetically.

use std::{env, path::PathBuf};

pub const DEFAULT_API_SERVER_ADDRESS: &str = "127.0.0.1:3000";

/// Connection settings for the external analysis source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSourceSettings {
    pub url: String,
    pub api_key: Option<String>,
    pub api_host: Option<String>,
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives under `spanalyze/.env` in the platform data directory:
/// - Linux: `~/.local/share/spanalyze/.env`
/// - macOS: `~/Library/Application Support/spanalyze/.env`
/// - Windows: `%LOCALAPPDATA%/spanalyze/.env`
///
/// A missing file is fine, values may come from the process environment.
/// Variables already set in the environment are not overridden.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or an existing `.env`
/// file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spanalyze/.env");
    path
}

/// Returns the address of the temporary OAuth callback server.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the bind address of the JSON API started by `spanalyze serve`.
///
/// Reads `API_SERVER_ADDRESS`, falling back to `127.0.0.1:3000`.
pub fn api_server_addr() -> String {
    env::var("API_SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_API_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_API_AUTH_CLIENT_ID").expect("SPOTIFY_API_AUTH_CLIENT_ID must be set")
}

/// Returns the Spotify OAuth redirect URI. It must match the redirect URI
/// registered for the application and point at [`server_addr`].
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_REDIRECT_URI` environment variable is not set.
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_API_REDIRECT_URI").expect("SPOTIFY_API_REDIRECT_URI must be set")
}

/// Returns the Spotify API scope permissions, e.g.
/// `playlist-read-private playlist-read-collaborative user-read-private`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_API_AUTH_SCOPE").expect("SPOTIFY_API_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_AUTH_URL` environment variable is not set.
pub fn spotify_apiauth_url() -> String {
    env::var("SPOTIFY_API_AUTH_URL").expect("SPOTIFY_API_AUTH_URL must be set")
}

/// Returns the Spotify Web API base URL, e.g. `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the Spotify OAuth token exchange URL.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_TOKEN_URL` environment variable is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").expect("SPOTIFY_API_TOKEN_URL must be set")
}

/// Variables the JSON API reads while handling requests.
pub const API_REQUIRED_VARS: &[&str] = &["SPOTIFY_API_URL"];

/// Returns the variables of `required` that are unset or blank.
pub fn missing_vars(required: &[&'static str]) -> Vec<&'static str> {
    missing_vars_from(required, |key| env::var(key).ok())
}

/// Same as [`missing_vars`] over an arbitrary variable lookup.
pub fn missing_vars_from<F>(required: &[&'static str], lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    required
        .iter()
        .copied()
        .filter(|key| lookup(key).is_none_or(|v| v.trim().is_empty()))
        .collect()
}

/// Returns the analysis source settings, or `None` when `ANALYSIS_API_URL`
/// is unset or empty.
pub fn analysis_source() -> Option<AnalysisSourceSettings> {
    analysis_source_from(|key| env::var(key).ok())
}

/// Builds analysis source settings from an arbitrary variable lookup.
pub fn analysis_source_from<F>(lookup: F) -> Option<AnalysisSourceSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    Some(AnalysisSourceSettings {
        url: non_empty("ANALYSIS_API_URL")?,
        api_key: non_empty("ANALYSIS_API_KEY"),
        api_host: non_empty("ANALYSIS_API_HOST"),
    })
}
