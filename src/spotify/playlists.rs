use reqwest::Client;

use crate::{
    config,
    spotify::get_json,
    types::{GetUserPlaylistsResponse, Playlist, PlaylistInfo, PlaylistTracksResponse, Track},
};

const PLAYLISTS_LIMIT: u32 = 50;
const TRACKS_LIMIT: u32 = 100;
const TRACK_FIELDS: &str =
    "next,items(track(id,name,artists(name),duration_ms,popularity,album(name)))";

/// Retrieves the playlists of the current user.
///
/// Only the first page of up to 50 playlists is requested.
///
/// # Example
///
/// ```
/// let playlists = get_user_playlists(&token).await?;
/// for playlist in playlists {
///     println!("{} ({} tracks)", playlist.name, playlist.tracks.total);
/// }
/// ```
pub async fn get_user_playlists(token: &str) -> Result<Vec<Playlist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/playlists?limit={limit}",
        uri = &config::spotify_apiurl(),
        limit = PLAYLISTS_LIMIT
    );

    let client = Client::new();
    let res = get_json::<GetUserPlaylistsResponse>(&client, &api_url, token).await?;
    Ok(res.items)
}

/// Retrieves name, description, owner and follower count of a playlist.
pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    get_json::<Playlist>(&client, &api_url, token).await
}

/// Retrieves every track of a playlist in playlist order.
///
/// Follows the `next` links of the paginated endpoint. Entries without a
/// track (removed items) or without an id (local files) are dropped, so each
/// returned [`Track`] has a Spotify id.
pub async fn get_playlist_tracks(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<Track>, reqwest::Error> {
    let client = Client::new();
    let mut next = Some(format!(
        "{uri}/playlists/{id}/tracks?limit={limit}&fields={fields}",
        uri = &config::spotify_apiurl(),
        id = playlist_id,
        limit = TRACKS_LIMIT,
        fields = TRACK_FIELDS
    ));
    let mut tracks: Vec<Track> = Vec::new();

    while let Some(api_url) = next {
        let page = get_json::<PlaylistTracksResponse>(&client, &api_url, token).await?;
        tracks.extend(collect_tracks(page.items));
        next = page.next;
    }

    Ok(tracks)
}

/// Keeps the entries that carry a track with an id.
pub fn collect_tracks(items: Vec<crate::types::PlaylistItem>) -> Vec<Track> {
    items
        .into_iter()
        .filter_map(|item| item.track.and_then(|t| t.into_track()))
        .collect()
}

/// Builds the playlist header that accompanies an analysis.
pub fn playlist_info(playlist: &Playlist, track_count: usize) -> PlaylistInfo {
    PlaylistInfo {
        id: playlist.id.clone(),
        name: playlist.name.clone(),
        description: playlist.description.clone().unwrap_or_default(),
        owner: playlist.owner.display_name.clone().unwrap_or_default(),
        follower_count: playlist.followers.total,
        track_count,
    }
}
