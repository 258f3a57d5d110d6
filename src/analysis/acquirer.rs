use std::{future::Future, sync::Arc, time::Duration};

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_json::Value;
use thiserror::Error;
use tokio::time::{sleep, timeout};

use crate::{
    analysis::estimator::{FeatureEstimator, TrackMetadata},
    types::{AudioFeatures, Track},
    utils, warning,
};

pub const BATCH_SIZE: usize = 5;
pub const BATCH_DELAY: Duration = Duration::from_millis(200);
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Why a single track lookup did not produce usable data.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("network error: {0}")]
    Network(reqwest::Error),
    #[error("analysis source answered with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("no search hit in response")]
    MissingHit,
    #[error("lookup task failed: {0}")]
    Task(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else {
            LookupError::Network(err)
        }
    }
}

/// An external service that can be searched by free text for a track.
///
/// Implementations return the raw JSON search result; genre extraction is
/// done by the acquirer.
pub trait FeatureSource: Send + Sync + 'static {
    fn lookup(&self, query: String) -> impl Future<Output = Result<Value, LookupError>> + Send;
}

#[derive(Debug, Clone, Copy)]
pub struct AcquirerConfig {
    pub batch_size: usize,
    pub batch_delay: Duration,
    pub lookup_timeout: Duration,
}

impl Default for AcquirerConfig {
    fn default() -> Self {
        Self {
            batch_size: BATCH_SIZE,
            batch_delay: BATCH_DELAY,
            lookup_timeout: LOOKUP_TIMEOUT,
        }
    }
}

/// Record substituted for a track whose lookup failed.
pub fn default_features(id: &str) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        danceability: 0.5,
        energy: 0.5,
        speechiness: 0.1,
        acousticness: 0.3,
        instrumentalness: 0.2,
        liveness: 0.2,
        valence: 0.5,
        tempo: 120.0,
    }
}

/// Pulls `genres.primary` out of the first search hit.
///
/// Both `{"tracks": {"hits": [...]}}` and a top-level `{"hits": [...]}` are
/// accepted. A response without any hit is an error; a hit without a genre
/// yields an empty string.
pub fn extract_genre(response: &Value) -> Result<String, LookupError> {
    let hit = response
        .pointer("/tracks/hits/0/track")
        .or_else(|| response.pointer("/hits/0/track"))
        .ok_or(LookupError::MissingHit)?;

    Ok(hit
        .pointer("/genres/primary")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

/// Resolves exactly one [`AudioFeatures`] record per track.
///
/// Without a source every record is synthetic. With a source, tracks are
/// looked up in batches of concurrent tasks; each batch is awaited in full
/// and followed by a pause before the next one starts. Failed lookups are
/// replaced by [`default_features`], so the output always has the same length
/// and order as the input.
pub struct FeatureAcquirer<S: FeatureSource, R: Rng = StdRng> {
    source: Option<Arc<S>>,
    config: AcquirerConfig,
    estimator: FeatureEstimator<R>,
}

impl<S: FeatureSource> FeatureAcquirer<S, StdRng> {
    pub fn new(source: Option<S>) -> Self {
        Self::with_rng(source, AcquirerConfig::default(), StdRng::from_os_rng())
    }
}

impl<S: FeatureSource, R: Rng> FeatureAcquirer<S, R> {
    pub fn with_rng(source: Option<S>, config: AcquirerConfig, rng: R) -> Self {
        Self {
            source: source.map(Arc::new),
            config,
            estimator: FeatureEstimator::new(rng),
        }
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub async fn acquire(&mut self, tracks: &[Track]) -> Vec<AudioFeatures> {
        let Some(source) = self.source.clone() else {
            return tracks
                .iter()
                .map(|t| {
                    self.estimator
                        .estimate_from_genre_only(&t.id, &t.name, t.primary_artist())
                })
                .collect();
        };

        let batch_size = self.config.batch_size.max(1);
        let batch_count = tracks.len().div_ceil(batch_size);
        let mut features: Vec<AudioFeatures> = Vec::with_capacity(tracks.len());

        for (batch_idx, batch) in tracks.chunks(batch_size).enumerate() {
            let mut handles = Vec::with_capacity(batch.len());

            for track in batch {
                let source = Arc::clone(&source);
                let query = utils::lookup_query(&track.name, track.primary_artist());
                let limit = self.config.lookup_timeout;
                handles.push(tokio::spawn(async move {
                    match timeout(limit, source.lookup(query)).await {
                        Ok(result) => result,
                        Err(_) => Err(LookupError::Timeout(limit)),
                    }
                }));
            }

            // handles are awaited in submission order, so slots match tracks
            for (track, handle) in batch.iter().zip(handles) {
                let outcome = match handle.await {
                    Ok(result) => result.and_then(|response| extract_genre(&response)),
                    Err(e) => Err(LookupError::Task(e.to_string())),
                };

                let record = match outcome {
                    Ok(genre) => self.estimator.estimate(&TrackMetadata {
                        id: &track.id,
                        name: &track.name,
                        artist: track.primary_artist(),
                        genre: &genre,
                    }),
                    Err(e) => {
                        warning!(
                            "Using default features for '{}': {}",
                            track.name,
                            e
                        );
                        default_features(&track.id)
                    }
                };
                features.push(record);
            }

            if batch_idx + 1 < batch_count {
                sleep(self.config.batch_delay).await;
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_genre_reads_nested_hit() {
        let response = json!({
            "tracks": { "hits": [ { "track": { "genres": { "primary": "Dance" } } } ] }
        });
        assert_eq!(extract_genre(&response).unwrap(), "Dance");
    }

    #[test]
    fn extract_genre_accepts_top_level_hits() {
        let response = json!({ "hits": [ { "track": { "genres": { "primary": "Rock" } } } ] });
        assert_eq!(extract_genre(&response).unwrap(), "Rock");
    }

    #[test]
    fn extract_genre_without_genre_is_empty() {
        let response = json!({ "tracks": { "hits": [ { "track": { "title": "x" } } ] } });
        assert_eq!(extract_genre(&response).unwrap(), "");
    }

    #[test]
    fn extract_genre_without_hit_fails() {
        assert!(matches!(
            extract_genre(&json!({ "tracks": { "hits": [] } })),
            Err(LookupError::MissingHit)
        ));
        assert!(matches!(extract_genre(&json!({})), Err(LookupError::MissingHit)));
    }

    #[test]
    fn lookup_error_messages() {
        assert_eq!(
            LookupError::Timeout(Duration::from_millis(250)).to_string(),
            "lookup timed out after 250ms"
        );
        assert_eq!(
            LookupError::Status(429).to_string(),
            "analysis source answered with status 429"
        );
        assert_eq!(LookupError::MissingHit.to_string(), "no search hit in response");

        let err: Box<dyn std::error::Error> = Box::new(LookupError::Malformed("eof".into()));
        assert_eq!(err.to_string(), "malformed response: eof");
    }
}
