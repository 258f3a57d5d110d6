use std::io::{BufRead, Write};

use tabled::Table;

use crate::{
    cli::auth::access_token,
    error, info,
    spotify,
    types::{Playlist, PlaylistTableRow},
    utils,
};

/// Prints the playlists of the authenticated user.
pub async fn list_playlists(token: Option<String>) {
    let token = access_token(token, false).await;

    let playlists = match spotify::playlists::get_user_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    if playlists.is_empty() {
        info!("No playlists found.");
        return;
    }

    println!("{}", playlist_table(&playlists));
}

pub fn playlist_table(playlists: &[Playlist]) -> Table {
    let rows: Vec<PlaylistTableRow> = playlists
        .iter()
        .enumerate()
        .map(|(idx, p)| PlaylistTableRow {
            index: idx + 1,
            id: p.id.clone(),
            name: p.name.clone(),
            tracks: p.tracks.total,
            owner: p.owner.display_name.clone().unwrap_or_default(),
        })
        .collect();

    Table::new(rows)
}

/// Lists `playlists` on `out` and reads a 1-based choice from `input`.
///
/// Returns the index into `playlists`.
pub fn prompt_selection<W: Write, R: BufRead>(
    out: &mut W,
    input: &mut R,
    playlists: &[Playlist],
) -> Result<usize, String> {
    let prompt = writeln!(out, "{}", playlist_table(playlists))
        .and_then(|_| write!(out, "Select a playlist [1-{}]: ", playlists.len()))
        .and_then(|_| out.flush());
    if let Err(e) = prompt {
        return Err(format!("Cannot show playlists: {}", e));
    }

    let mut line = String::new();
    if let Err(e) = input.read_line(&mut line) {
        return Err(format!("Cannot read selection: {}", e));
    }

    utils::parse_selection(&line, playlists.len())
}
