use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Formats milliseconds as `M:SS`. Minutes are not wrapped into hours.
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

/// Integer division rounding half away from zero, i.e. half-up for the
/// non-negative values used here. Returns 0 for a zero divisor.
pub fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (numerator * 2 + denominator) / (denominator * 2)
}

/// Maps a tempo onto 0..=1 over the 60-200 BPM display range.
pub fn normalize_tempo(bpm: f64) -> f64 {
    ((bpm - 60.0) / 140.0).clamp(0.0, 1.0)
}

/// Renders a fixed-width bar for a value in 0..=1.
pub fn render_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Builds the free-text query sent to the analysis source.
pub fn lookup_query(track_name: &str, artist_name: Option<&str>) -> String {
    match artist_name {
        Some(artist) if !artist.is_empty() => format!("{} {}", track_name, artist),
        _ => track_name.to_string(),
    }
}

/// Parses a 1-based selection from user input against a list length.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, String> {
    let number = input
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if number == 0 || number > len {
        return Err(format!("Selection must be between 1 and {}", len));
    }
    Ok(number - 1)
}
