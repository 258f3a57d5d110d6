//! Glue between the Spotify client and the analysis core.
//!
//! Feature resolution goes through three tiers, the first that yields data
//! wins:
//! 1. Spotify's own audio features
//! 2. the configured analysis source, degrading per track
//! 3. synthetic estimation when no source is configured

use rand::Rng;

use crate::{
    analysis::{FeatureAcquirer, FeatureSource, HttpFeatureSource, analyze},
    config::AnalysisSourceSettings,
    spotify::{features, playlists},
    types::{AudioFeatures, FeatureOrigin, PlaylistAnalysis, Track},
    warning,
};

/// Fetches a playlist with all its tracks and builds its analysis.
///
/// # Errors
///
/// Only failures to load the playlist or its tracks are returned. Missing
/// audio features never fail the analysis.
pub async fn analyze_playlist(
    token: &str,
    playlist_id: &str,
    source: Option<AnalysisSourceSettings>,
) -> Result<PlaylistAnalysis, reqwest::Error> {
    let playlist = playlists::get_playlist(token, playlist_id).await?;
    let tracks = playlists::get_playlist_tracks(token, playlist_id).await?;

    let (features, feature_origin) = resolve_features(token, &tracks, source).await;
    let analysis = analyze(&tracks, &features);

    Ok(PlaylistAnalysis {
        playlist: playlists::playlist_info(&playlist, tracks.len()),
        feature_origin,
        analysis,
    })
}

/// Returns one optional feature record per track and where they came from.
pub async fn resolve_features(
    token: &str,
    tracks: &[Track],
    source: Option<AnalysisSourceSettings>,
) -> (Vec<Option<AudioFeatures>>, FeatureOrigin) {
    match features::get_audio_features(token, tracks).await {
        Ok(measured) if features::has_any(&measured) => {
            return (measured, FeatureOrigin::Spotify);
        }
        Ok(_) => {
            if !tracks.is_empty() {
                warning!("Spotify has no audio features for these tracks.");
            }
        }
        Err(e) => warning!("Spotify audio features unavailable: {}", e),
    }

    let mut acquirer = FeatureAcquirer::new(source.map(HttpFeatureSource::new));
    fallback_features(&mut acquirer, tracks).await
}

/// Resolves features through the acquirer and tags their origin.
pub async fn fallback_features<S: FeatureSource, R: Rng>(
    acquirer: &mut FeatureAcquirer<S, R>,
    tracks: &[Track],
) -> (Vec<Option<AudioFeatures>>, FeatureOrigin) {
    let origin = if acquirer.has_source() {
        FeatureOrigin::Source
    } else {
        FeatureOrigin::Synthetic
    };

    let features = acquirer.acquire(tracks).await;
    (features.into_iter().map(Some).collect(), origin)
}
