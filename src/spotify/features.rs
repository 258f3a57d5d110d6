use reqwest::Client;

use crate::{
    config,
    spotify::get_json,
    types::{AudioFeatures, AudioFeaturesResponse, Track},
};

/// Maximum number of ids accepted by `GET /audio-features`.
pub const AUDIO_FEATURES_CHUNK: usize = 100;

/// Retrieves Spotify's measured audio features for the given tracks.
///
/// Requests are made in chunks of 100 ids. The result is index-aligned with
/// `tracks`; tracks Spotify has no analysis for are `None`.
///
/// # Errors
///
/// Any failed chunk fails the whole call. The endpoint answers `403` for
/// applications without access to it, which callers should treat as "no
/// authoritative features available".
pub async fn get_audio_features(
    token: &str,
    tracks: &[Track],
) -> Result<Vec<Option<AudioFeatures>>, reqwest::Error> {
    let client = Client::new();
    let mut features: Vec<Option<AudioFeatures>> = Vec::with_capacity(tracks.len());

    for chunk in tracks.chunks(AUDIO_FEATURES_CHUNK) {
        let track_ids = chunk
            .iter()
            .map(|t| t.id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let api_url = format!(
            "{uri}/audio-features?ids={ids}",
            uri = &config::spotify_apiurl(),
            ids = track_ids
        );

        let res = get_json::<AudioFeaturesResponse>(&client, &api_url, token).await?;
        features.extend(align(chunk, res.audio_features));
    }

    Ok(features)
}

/// Pads or trims a chunk's response so it lines up with the requested tracks.
fn align(chunk: &[Track], mut response: Vec<Option<AudioFeatures>>) -> Vec<Option<AudioFeatures>> {
    response.resize(chunk.len(), None);
    response
}

/// True when at least one record is present.
pub fn has_any(features: &[Option<AudioFeatures>]) -> bool {
    features.iter().any(Option::is_some)
}
