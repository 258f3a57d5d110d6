use std::collections::{BTreeMap, HashMap};

use crate::{
    types::{ArtistTally, AudioFeatures, BasicStats, DecadeBucket, FEATURE_NAMES, Report, Track},
    utils,
};

/// Maximum number of entries kept in `Report::top_artists`.
pub const TOP_ARTISTS_LIMIT: usize = 10;

/// Reduces a playlist's tracks and their audio features into a [`Report`].
///
/// `features` may contain `None` for tracks without a measurement; those
/// entries are left out of the averages instead of counting as zero. The
/// slice does not have to line up with `tracks` by index.
///
/// An empty track list yields `Report::default()`. The function never fails.
///
/// # Example
///
/// ```
/// let report = analyze(&tracks, &features);
/// println!("{} tracks, {}", report.basic.track_count, report.basic.total_duration_formatted);
/// ```
pub fn analyze(tracks: &[Track], features: &[Option<AudioFeatures>]) -> Report {
    if tracks.is_empty() {
        return Report::default();
    }

    Report {
        basic: basic_stats(tracks),
        audio_features: average_features(features),
        top_artists: top_artists(tracks, TOP_ARTISTS_LIMIT),
        decades: decade_buckets(tracks),
    }
}

fn basic_stats(tracks: &[Track]) -> BasicStats {
    let track_count = tracks.len();
    let total_duration_ms: u64 = tracks.iter().map(|t| t.duration_ms).sum();
    let total_popularity: u64 = tracks.iter().map(|t| t.popularity as u64).sum();

    let avg_popularity = utils::div_round_half_up(total_popularity, track_count as u64) as u32;
    let avg_track_length_ms = utils::div_round_half_up(total_duration_ms, track_count as u64);

    BasicStats {
        track_count,
        total_duration_ms,
        total_duration_formatted: utils::format_duration(total_duration_ms),
        avg_popularity,
        avg_track_length_ms,
        avg_track_length_formatted: utils::format_duration(avg_track_length_ms),
    }
}

/// Averages every named feature over the present records only.
pub fn average_features(features: &[Option<AudioFeatures>]) -> BTreeMap<String, f64> {
    let valid: Vec<&AudioFeatures> = features.iter().flatten().collect();
    if valid.is_empty() {
        return BTreeMap::new();
    }

    let mut sums = [0.0_f64; FEATURE_NAMES.len()];
    for record in &valid {
        for (slot, (_, value)) in sums.iter_mut().zip(record.values()) {
            *slot += value;
        }
    }

    let count = valid.len() as f64;
    FEATURE_NAMES
        .iter()
        .zip(sums)
        .map(|(name, sum)| (name.to_string(), sum / count))
        .collect()
}

/// Counts credits per artist name across all tracks and returns the `limit`
/// most frequent. Equal counts keep the order in which artists were first seen.
pub fn top_artists(tracks: &[Track], limit: usize) -> Vec<ArtistTally> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<ArtistTally> = Vec::new();

    for artist in tracks.iter().flat_map(|t| t.artists.iter()) {
        match positions.get(artist.name.as_str()) {
            Some(&idx) => tallies[idx].count += 1,
            None => {
                positions.insert(artist.name.as_str(), tallies.len());
                tallies.push(ArtistTally {
                    name: artist.name.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, which keeps first-seen order among ties
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies.truncate(limit);
    tallies
}

/// Guesses a decade from the track name. This is a placeholder heuristic and
/// does not look at release dates.
pub fn decade_for(track_name: &str) -> &'static str {
    let name = track_name.to_lowercase();

    if name.contains("80") || name.contains("eighties") {
        "1980s"
    } else if name.contains("90") || name.contains("nineties") {
        "1990s"
    } else if name.contains("2000") {
        "2000s"
    } else {
        "2010s"
    }
}

fn decade_buckets(tracks: &[Track]) -> Vec<DecadeBucket> {
    let mut buckets: Vec<DecadeBucket> = Vec::new();

    for track in tracks {
        let decade = decade_for(&track.name);
        match buckets.iter_mut().find(|b| b.decade == decade) {
            Some(bucket) => bucket.count += 1,
            None => buckets.push(DecadeBucket {
                decade: decade.to_string(),
                count: 1,
            }),
        }
    }

    buckets
}
