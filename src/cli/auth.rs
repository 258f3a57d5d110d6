use crate::{error, info, note, spotify, success};

/// Returns the given access token, or runs the PKCE flow to obtain one.
///
/// With `json` set the login status lines go to stderr.
pub async fn access_token(explicit: Option<String>, json: bool) -> String {
    if let Some(token) = explicit.filter(|t| !t.trim().is_empty()) {
        return token;
    }

    if json {
        note!("Opening the Spotify consent page in your browser...");
    } else {
        info!("Opening the Spotify consent page in your browser...");
    }

    match spotify::auth::authorize().await {
        Ok(token) => {
            if json {
                note!("Authentication successful!");
            } else {
                success!("Authentication successful!");
            }
            token.access_token
        }
        Err(e) => error!("{}", e),
    }
}
