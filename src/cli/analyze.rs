use std::{
    io::{self, Write},
    time::Duration,
};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    cli::{auth::access_token, playlists::prompt_selection, report},
    config, error, info, pipeline, spotify, success,
};

/// Analyzes a playlist and prints the report, or its JSON when `json` is set.
///
/// Without a playlist id the user's playlists are listed and one is picked
/// interactively.
pub async fn analyze(token: Option<String>, playlist_id: Option<String>, json: bool) {
    let token = access_token(token, json).await;

    let playlist_id = match playlist_id {
        Some(id) => id,
        None => pick_playlist(&token, json).await,
    };

    let source = config::analysis_source();
    if source.is_none() && !json {
        info!("No analysis source configured, missing audio features will be synthetic.");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Analyzing playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = pipeline::analyze_playlist(&token, &playlist_id, source).await;
    pb.finish_and_clear();

    let analysis = match result {
        Ok(analysis) => analysis,
        Err(e) => error!("Failed to analyze playlist {}: {}", playlist_id, e),
    };

    if json {
        match serde_json::to_string_pretty(&analysis) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Cannot serialize analysis: {}", e),
        }
        return;
    }

    success!("Analysis of '{}' complete.", analysis.playlist.name);
    report::print_analysis(&analysis);
}

/// Lets the user choose one of their playlists. The list and prompt go to
/// stderr when `json` is set.
async fn pick_playlist(token: &str, json: bool) -> String {
    let playlists = match spotify::playlists::get_user_playlists(token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    if playlists.is_empty() {
        error!("No playlists found.");
    }

    let mut out: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    match prompt_selection(&mut out, &mut io::stdin().lock(), &playlists) {
        Ok(idx) => playlists[idx].id.clone(),
        Err(e) => error!("{}", e),
    }
}
