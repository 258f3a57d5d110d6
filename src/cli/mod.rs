//! # CLI Module
//!
//! User-facing commands of spanalyze. Each command resolves a Spotify access
//! token first: either the one passed with `--access-token`, or a fresh one
//! from the OAuth 2.0 PKCE flow. Tokens are never stored.
//!
//! ## Commands
//!
//! - [`list_playlists`] - prints the user's playlists as a table
//! - [`analyze`] - analyzes one playlist, picking it interactively when no
//!   id is given, and prints the report as tables or JSON
//! - [`serve`] - runs the local JSON API
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Pipeline (feature tiers, analysis)
//!     ↓
//! Spotify Integration / Analysis Source
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Usage Patterns
//!
//! ```bash
//! spanalyze playlists
//! spanalyze analyze                          # pick from a list
//! spanalyze analyze 37i9dQZF1DXcBWIGoYBM5M --json
//! spanalyze serve --addr 127.0.0.1:3000
//! ```
//!
//! Fatal problems are reported with the `error!` macro, which exits the
//! process. Degraded audio features are reported with `warning!` and never
//! stop an analysis.

mod analyze;
mod auth;
mod playlists;
mod report;
mod serve;

pub use analyze::analyze;
pub use auth::access_token;
pub use playlists::{list_playlists, prompt_selection};
pub use report::{feature_label, feature_row, print_analysis};
pub use serve::serve;
