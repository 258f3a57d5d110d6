use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::AudioFeatures;

pub const DANCEABILITY_TRIGGERED: RangeInclusive<f64> = 0.7..=1.0;
pub const DANCEABILITY_OTHERWISE: RangeInclusive<f64> = 0.2..=0.8;
pub const ENERGY_TRIGGERED: RangeInclusive<f64> = 0.7..=1.0;
pub const ENERGY_OTHERWISE: RangeInclusive<f64> = 0.3..=1.0;
pub const SPEECHINESS_TRIGGERED: RangeInclusive<f64> = 0.4..=0.8;
pub const SPEECHINESS_OTHERWISE: RangeInclusive<f64> = 0.0..=0.2;
pub const ACOUSTICNESS_TRIGGERED: RangeInclusive<f64> = 0.6..=1.0;
pub const ACOUSTICNESS_OTHERWISE: RangeInclusive<f64> = 0.0..=0.6;
pub const INSTRUMENTALNESS_TRIGGERED: RangeInclusive<f64> = 0.5..=1.0;
pub const INSTRUMENTALNESS_OTHERWISE: RangeInclusive<f64> = 0.0..=0.3;
pub const LIVENESS: RangeInclusive<f64> = 0.1..=0.4;
pub const VALENCE_TRIGGERED: RangeInclusive<f64> = 0.6..=1.0;
pub const VALENCE_OTHERWISE: RangeInclusive<f64> = 0.2..=1.0;
pub const TEMPO_FAST: RangeInclusive<f64> = 120.0..=180.0;
pub const TEMPO_SLOW: RangeInclusive<f64> = 60.0..=100.0;
pub const TEMPO_OTHERWISE: RangeInclusive<f64> = 80.0..=160.0;

/// Metadata available for a track when no measured features exist.
///
/// Only `genre` drives the estimate. `name` and `artist` are carried so
/// callers can describe the track they estimated; keywords in them never
/// trigger a range.
#[derive(Debug, Clone, Copy)]
pub struct TrackMetadata<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub artist: Option<&'a str>,
    /// Genre tag from the analysis source, empty when unknown.
    pub genre: &'a str,
}

/// Produces rough audio features from genre keywords.
///
/// Each feature is drawn uniformly from a range chosen by whether the genre
/// contains one of the feature's trigger keywords. The random source is
/// injected so callers can seed it.
pub struct FeatureEstimator<R: Rng> {
    rng: R,
}

impl<R: Rng> FeatureEstimator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn estimate(&mut self, metadata: &TrackMetadata<'_>) -> AudioFeatures {
        let genre = metadata.genre.to_lowercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| genre.contains(k));

        let danceable = has(&["dance", "electronic"]);

        let tempo = if danceable {
            TEMPO_FAST
        } else if has(&["ballad", "slow"]) {
            TEMPO_SLOW
        } else {
            TEMPO_OTHERWISE
        };

        AudioFeatures {
            id: metadata.id.to_string(),
            danceability: self.draw(pick(danceable, DANCEABILITY_TRIGGERED, DANCEABILITY_OTHERWISE)),
            energy: self.draw(pick(has(&["rock", "metal"]), ENERGY_TRIGGERED, ENERGY_OTHERWISE)),
            speechiness: self.draw(pick(
                has(&["rap", "hip hop"]),
                SPEECHINESS_TRIGGERED,
                SPEECHINESS_OTHERWISE,
            )),
            acousticness: self.draw(pick(
                has(&["acoustic", "folk"]),
                ACOUSTICNESS_TRIGGERED,
                ACOUSTICNESS_OTHERWISE,
            )),
            instrumentalness: self.draw(pick(
                has(&["instrumental", "classical"]),
                INSTRUMENTALNESS_TRIGGERED,
                INSTRUMENTALNESS_OTHERWISE,
            )),
            liveness: self.draw(LIVENESS),
            valence: self.draw(pick(has(&["happy", "pop"]), VALENCE_TRIGGERED, VALENCE_OTHERWISE)),
            tempo: self.draw(tempo),
        }
    }

    /// Estimates with no genre at all, so every feature uses its
    /// untriggered range.
    pub fn estimate_from_genre_only(
        &mut self,
        id: &str,
        track_name: &str,
        artist_name: Option<&str>,
    ) -> AudioFeatures {
        self.estimate(&TrackMetadata {
            id,
            name: track_name,
            artist: artist_name,
            genre: "",
        })
    }

    fn draw(&mut self, range: RangeInclusive<f64>) -> f64 {
        self.rng.random_range(range)
    }
}

fn pick(triggered: bool, on: RangeInclusive<f64>, off: RangeInclusive<f64>) -> RangeInclusive<f64> {
    if triggered { on } else { off }
}
