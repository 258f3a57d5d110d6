use rand::{SeedableRng, rngs::StdRng};
use spanalyze::analysis::estimator::*;
use spanalyze::types::AudioFeatures;

// Helper function to estimate many records for one genre with a fixed seed
fn estimate_many(genre: &str, seed: u64) -> Vec<AudioFeatures> {
    let mut estimator = FeatureEstimator::new(StdRng::seed_from_u64(seed));
    (0..200)
        .map(|i| {
            let id = i.to_string();
            estimator.estimate(&TrackMetadata {
                id: &id,
                name: "Track",
                artist: Some("Artist"),
                genre,
            })
        })
        .collect()
}

#[test]
fn test_untriggered_ranges() {
    for f in estimate_many("", 1) {
        assert!(DANCEABILITY_OTHERWISE.contains(&f.danceability));
        assert!(ENERGY_OTHERWISE.contains(&f.energy));
        assert!(SPEECHINESS_OTHERWISE.contains(&f.speechiness));
        assert!(ACOUSTICNESS_OTHERWISE.contains(&f.acousticness));
        assert!(INSTRUMENTALNESS_OTHERWISE.contains(&f.instrumentalness));
        assert!(LIVENESS.contains(&f.liveness));
        assert!(VALENCE_OTHERWISE.contains(&f.valence));
        assert!(TEMPO_OTHERWISE.contains(&f.tempo));
    }
}

#[test]
fn test_dance_genre_triggers_danceability_and_fast_tempo() {
    for f in estimate_many("Dance", 2) {
        assert!(DANCEABILITY_TRIGGERED.contains(&f.danceability));
        assert!(TEMPO_FAST.contains(&f.tempo));
        assert!(ENERGY_OTHERWISE.contains(&f.energy));
    }

    for f in estimate_many("electronic", 3) {
        assert!(DANCEABILITY_TRIGGERED.contains(&f.danceability));
        assert!(TEMPO_FAST.contains(&f.tempo));
    }
}

#[test]
fn test_keyword_matching_is_case_insensitive_substring() {
    for f in estimate_many("Hard ROCK", 4) {
        assert!(ENERGY_TRIGGERED.contains(&f.energy));
    }
    for f in estimate_many("Alternative Hip Hop", 5) {
        assert!(SPEECHINESS_TRIGGERED.contains(&f.speechiness));
    }
    for f in estimate_many("Singer/Songwriter Folk", 6) {
        assert!(ACOUSTICNESS_TRIGGERED.contains(&f.acousticness));
    }
    for f in estimate_many("Classical", 7) {
        assert!(INSTRUMENTALNESS_TRIGGERED.contains(&f.instrumentalness));
    }
    for f in estimate_many("K-Pop", 8) {
        assert!(VALENCE_TRIGGERED.contains(&f.valence));
    }
}

#[test]
fn test_slow_genres_use_slow_tempo() {
    for f in estimate_many("Power Ballad", 9) {
        assert!(TEMPO_SLOW.contains(&f.tempo));
    }
    for f in estimate_many("slowcore", 10) {
        assert!(TEMPO_SLOW.contains(&f.tempo));
    }
}

#[test]
fn test_dance_tempo_wins_over_slow() {
    for f in estimate_many("slow dance", 11) {
        assert!(TEMPO_FAST.contains(&f.tempo));
    }
}

#[test]
fn test_liveness_is_unconditional() {
    for genre in ["", "rock", "dance", "live"] {
        for f in estimate_many(genre, 12) {
            assert!(LIVENESS.contains(&f.liveness));
        }
    }
}

#[test]
fn test_estimate_from_genre_only_uses_untriggered_ranges() {
    let mut estimator = FeatureEstimator::new(StdRng::seed_from_u64(13));

    // Keywords in the name or artist are not treated as a genre
    let f = estimator.estimate_from_genre_only("id-1", "Dance Rock Ballad", Some("Pop Rap"));

    assert_eq!(f.id, "id-1");
    assert!(DANCEABILITY_OTHERWISE.contains(&f.danceability));
    assert!(SPEECHINESS_OTHERWISE.contains(&f.speechiness));
    assert!(TEMPO_OTHERWISE.contains(&f.tempo));
}

#[test]
fn test_same_seed_gives_same_estimate() {
    assert_eq!(estimate_many("pop", 42), estimate_many("pop", 42));
}

#[test]
fn test_name_and_artist_do_not_trigger_ranges() {
    let mut estimator = FeatureEstimator::new(StdRng::seed_from_u64(14));

    for i in 0..100 {
        let id = i.to_string();
        let f = estimator.estimate(&TrackMetadata {
            id: &id,
            name: "Dance Dance Acoustic Ballad",
            artist: Some("Classical Rap Rock"),
            genre: "",
        });
        assert!(DANCEABILITY_OTHERWISE.contains(&f.danceability));
        assert!(ENERGY_OTHERWISE.contains(&f.energy));
        assert!(SPEECHINESS_OTHERWISE.contains(&f.speechiness));
        assert!(ACOUSTICNESS_OTHERWISE.contains(&f.acousticness));
        assert!(INSTRUMENTALNESS_OTHERWISE.contains(&f.instrumentalness));
        assert!(TEMPO_OTHERWISE.contains(&f.tempo));
    }
}
