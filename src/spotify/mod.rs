//! # Spotify Integration Module
//!
//! The thin client layer between the analyzer and the Spotify Web API. It
//! covers exactly what a playlist analysis needs:
//!
//! ```text
//! CLI / local API
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Playlists (listing, metadata, paginated tracks)
//!     └── Audio features (batch lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! - [`auth`] - PKCE flow with a temporary local callback server. Tokens are
//!   kept in memory for a single invocation and never written to disk.
//! - [`playlists`] - `GET /me/playlists`, `GET /playlists/{id}` and
//!   `GET /playlists/{id}/tracks`, following `next` links.
//! - [`features`] - `GET /audio-features` in chunks of 100 ids. Many
//!   applications are no longer allowed to call this endpoint, so callers
//!   treat a failure as "no authoritative features" and fall back to
//!   [`crate::analysis::FeatureAcquirer`].
//!
//! ## Rate limiting and retries
//!
//! Every GET goes through [`get_json`]:
//! - `429 Too Many Requests` waits for `Retry-After` when it is at most 120
//!   seconds, otherwise a warning is printed and the error is returned
//! - `502 Bad Gateway` is retried after 10 seconds
//! - at most [`MAX_ATTEMPTS`] attempts are made
//!
//! All functions return `reqwest::Error` on failure so callers can inspect
//! the HTTP status.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::warning;

pub mod auth;
pub mod features;
pub mod playlists;

pub const MAX_ATTEMPTS: u32 = 3;
const MAX_RETRY_AFTER_SECS: u64 = 120;
const BAD_GATEWAY_DELAY: Duration = Duration::from_secs(10);

/// Sends an authenticated GET and decodes the JSON body, retrying on rate
/// limits and bad gateways.
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    let mut attempt = 1;

    loop {
        let response = client.get(url).bearer_auth(token).send().await?;
        let status = response.status();

        if attempt < MAX_ATTEMPTS {
            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = parse_retry_after(
                    response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok()),
                );
                if retry_after <= MAX_RETRY_AFTER_SECS {
                    sleep(Duration::from_secs(retry_after)).await;
                    attempt += 1;
                    continue; // retry
                }
                warning!(
                    "Retry after has reached an abnormal high of {} seconds. Try again later.",
                    retry_after
                );
            } else if status == StatusCode::BAD_GATEWAY {
                sleep(BAD_GATEWAY_DELAY).await;
                attempt += 1;
                continue; // retry
            }
        }

        return response.error_for_status()?.json::<T>().await;
    }
}

/// Reads a `Retry-After` header value in seconds, defaulting to 1.
pub fn parse_retry_after(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(1)
}
