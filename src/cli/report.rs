use tabled::Table;

use crate::{
    info,
    types::{
        ArtistTableRow, DecadeTableRow, FEATURE_NAMES, FeatureOrigin, FeatureTableRow,
        PlaylistAnalysis, Report,
    },
    utils, warning,
};

const BAR_WIDTH: usize = 20;

pub fn feature_label(name: &str) -> &str {
    match name {
        "danceability" => "Danceability",
        "energy" => "Energy",
        "speechiness" => "Speechiness",
        "acousticness" => "Acousticness",
        "instrumentalness" => "Instrumentalness",
        "liveness" => "Liveness",
        "valence" => "Happiness",
        "tempo" => "Tempo (BPM)",
        other => other,
    }
}

/// Tempo is shown in BPM and scaled over 60-200 for its bar; every other
/// feature is shown as a percentage.
pub fn feature_row(name: &str, value: f64) -> FeatureTableRow {
    let (shown, fraction) = if name == "tempo" {
        (format!("{}", value.round() as i64), utils::normalize_tempo(value))
    } else {
        (format!("{}%", (value * 100.0).round() as i64), value)
    };

    FeatureTableRow {
        feature: feature_label(name).to_string(),
        value: shown,
        bar: utils::render_bar(fraction, BAR_WIDTH),
    }
}

pub fn origin_note(origin: FeatureOrigin) -> &'static str {
    match origin {
        FeatureOrigin::Spotify => "measured by Spotify",
        FeatureOrigin::Source => "estimated from analysis source genres",
        FeatureOrigin::Synthetic => "synthetic, no analysis source configured",
    }
}

pub fn print_analysis(result: &PlaylistAnalysis) {
    let playlist = &result.playlist;
    let report = &result.analysis;

    info!(
        "{} by {} • {} tracks",
        playlist.name, playlist.owner, report.basic.track_count
    );
    if !playlist.description.is_empty() {
        info!("{}", playlist.description);
    }

    print_basic(report);

    if report.audio_features.is_empty() {
        warning!("Audio features not available for this playlist.");
    } else {
        info!("Audio features ({})", origin_note(result.feature_origin));
        let rows: Vec<FeatureTableRow> = FEATURE_NAMES
            .iter()
            .filter_map(|name| report.audio_features.get(*name).map(|v| feature_row(name, *v)))
            .collect();
        println!("{}", Table::new(rows));
    }

    if report.top_artists.is_empty() {
        warning!("No artist data available.");
    } else {
        info!("Top artists");
        let rows: Vec<ArtistTableRow> = report
            .top_artists
            .iter()
            .enumerate()
            .map(|(idx, a)| ArtistTableRow {
                rank: idx + 1,
                artist: a.name.clone(),
                songs: a.count,
            })
            .collect();
        println!("{}", Table::new(rows));
    }

    if !report.decades.is_empty() {
        info!("Decades (guessed from track names)");
        let rows: Vec<DecadeTableRow> = report
            .decades
            .iter()
            .map(|d| DecadeTableRow {
                decade: d.decade.clone(),
                tracks: d.count,
            })
            .collect();
        println!("{}", Table::new(rows));
    }
}

fn print_basic(report: &Report) {
    let basic = &report.basic;
    info!("Total duration: {}", basic.total_duration_formatted);
    info!("Average track length: {}", basic.avg_track_length_formatted);
    info!("Average popularity: {}/100", basic.avg_popularity);
    info!("Artists ranked: {}", report.top_artists.len());
}
