//! Spotify Playlist Analyzer Library
//!
//! This library analyzes Spotify playlists: it authenticates against the
//! Spotify Web API, loads the tracks of a playlist, resolves audio features
//! for them and reduces everything into a statistical report (durations,
//! popularity, averaged audio features, top artists, decade buckets).
//!
//! # Modules
//!
//! - `analysis` - Report aggregation and audio feature acquisition/estimation
//! - `api` - HTTP handlers for the OAuth callback and the local JSON API
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `pipeline` - Playlist loading and the feature fallback tiers
//! - `server` - Local HTTP servers
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spanalyze::{analysis, types::Track};
//!
//! let tracks: Vec<Track> = Vec::new();
//! let report = analysis::analyze(&tracks, &[]);
//! assert_eq!(report.basic.track_count, 0);
//! ```

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias for orchestration code that mixes error sources
/// (`reqwest`, `serde_json`, `std::io`, address parsing).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Same as [`info!`] but printed to stderr, for status lines that must not
/// mix with JSON on stdout.
#[macro_export]
macro_rules! note {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with code 1.
///
/// Only meant for the command-line layer. Library code that can recover
/// (feature lookups, the JSON API) uses [`warning!`] instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!` to stderr, so JSON
/// output on stdout stays parseable.
///
/// ```
/// warning!("Using default features for '{}': {}", track_name, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
