use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config,
    server::start_callback_server,
    types::{PkceToken, Token},
    utils, warning,
};

const AUTH_TIMEOUT: Duration = Duration::from_secs(60);

/// Runs the OAuth 2.0 PKCE flow and returns the resulting token.
///
/// 1. Generates a code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to store a token
///
/// The token lives only as long as the current invocation.
///
/// # Errors
///
/// Returns an error message if no token arrived within the timeout.
///
/// # Example
///
/// ```
/// let token = authorize().await?;
/// let playlists = spotify::playlists::get_user_playlists(&token.access_token).await?;
/// ```
pub async fn authorize() -> Result<Token, String> {
    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));

    // generate PKCE verifier and challenge
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move { start_callback_server(server_state).await });

    let auth_url = authorization_url(&code_challenge);

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    token.ok_or_else(|| "Authentication failed or timed out.".to_string())
}

/// Builds the Spotify consent URL for a PKCE challenge.
pub fn authorization_url(code_challenge: &str) -> String {
    format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = &config::spotify_client_id(),
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope().replace(' ', "%20")
    )
}

/// Polls the shared state once per second until the callback handler has
/// stored a token or the timeout passes.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < AUTH_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pkce_token) = lock.as_ref() {
            if let Some(token) = &pkce_token.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for an access token using PKCE.
///
/// # Errors
///
/// Returns an error message on network failure or when the response does
/// not contain an access token.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, String> {
    let client_id = &config::spotify_client_id();
    let redirect_uri = &config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json)
}

/// Reads a token endpoint response.
pub fn token_from_json(json: &Value) -> Result<Token, String> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| {
            format!(
                "Token response without access token: {}",
                json["error"].as_str().unwrap_or("unknown error")
            )
        })?
        .to_string();

    Ok(Token {
        access_token,
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_from_json_reads_fields() {
        let token = token_from_json(&json!({
            "access_token": "abc",
            "refresh_token": "def",
            "scope": "playlist-read-private",
            "expires_in": 1800
        }))
        .unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.refresh_token, "def");
        assert_eq!(token.expires_in, 1800);
    }

    #[test]
    fn token_from_json_requires_access_token() {
        let err = token_from_json(&json!({ "error": "invalid_grant" })).unwrap_err();
        assert!(err.contains("invalid_grant"));
    }
}
