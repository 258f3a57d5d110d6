use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TracksRef {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner: Owner,
    #[serde(default)]
    pub followers: Followers,
    #[serde(default)]
    pub tracks: TracksRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub id: String,
    pub name: String,
    pub tracks: u64,
    pub owner: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

/// Playlist entries as delivered by the tracks endpoint. Local files and
/// removed tracks come back with a `null` track or a `null` id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<RawTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTrack {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub popularity: Option<u32>,
    #[serde(default)]
    pub album: Option<TrackAlbum>,
}

impl RawTrack {
    pub fn into_track(self) -> Option<Track> {
        let id = self.id?;
        Some(Track {
            id,
            name: self.name,
            artists: self.artists,
            duration_ms: self.duration_ms.unwrap_or(0),
            popularity: self.popularity.unwrap_or(0),
            album: self.album,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    pub danceability: f64,
    pub energy: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
}

/// Names of the averaged features, in display order.
pub const FEATURE_NAMES: [&str; 8] = [
    "danceability",
    "energy",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "liveness",
    "valence",
    "tempo",
];

impl AudioFeatures {
    pub fn values(&self) -> [(&'static str, f64); 8] {
        [
            (FEATURE_NAMES[0], self.danceability),
            (FEATURE_NAMES[1], self.energy),
            (FEATURE_NAMES[2], self.speechiness),
            (FEATURE_NAMES[3], self.acousticness),
            (FEATURE_NAMES[4], self.instrumentalness),
            (FEATURE_NAMES[5], self.liveness),
            (FEATURE_NAMES[6], self.valence),
            (FEATURE_NAMES[7], self.tempo),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistTally {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecadeBucket {
    pub decade: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub track_count: usize,
    pub total_duration_ms: u64,
    pub total_duration_formatted: String,
    pub avg_popularity: u32,
    pub avg_track_length_ms: u64,
    pub avg_track_length_formatted: String,
}

impl Default for BasicStats {
    fn default() -> Self {
        Self {
            track_count: 0,
            total_duration_ms: 0,
            total_duration_formatted: "0:00".to_string(),
            avg_popularity: 0,
            avg_track_length_ms: 0,
            avg_track_length_formatted: "0:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub basic: BasicStats,
    pub audio_features: BTreeMap<String, f64>,
    pub top_artists: Vec<ArtistTally>,
    pub decades: Vec<DecadeBucket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureOrigin {
    Spotify,
    Source,
    Synthetic,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub owner: String,
    pub follower_count: u64,
    pub track_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistAnalysis {
    pub playlist: PlaylistInfo,
    pub feature_origin: FeatureOrigin,
    pub analysis: Report,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub artist: String,
    pub songs: usize,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
    pub bar: String,
}

#[derive(Tabled)]
pub struct DecadeTableRow {
    pub decade: String,
    pub tracks: usize,
}
