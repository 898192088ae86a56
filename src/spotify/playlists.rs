use crate::{
    spotify::{get_json, get_json_url},
    types::{GetUserPlaylistsResponse, Playlist, PlaylistItemsResponse},
};

/// Retrieves all playlists owned or followed by the current user, following
/// the `next` links until the last page.
///
/// Requires the `playlist-read-private` scope for private playlists and
/// `playlist-read-collaborative` for collaborative ones.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Errors
///
/// Returns a `reqwest::Error` if any page request fails. Playlists from
/// pages fetched before the failure are discarded.
pub async fn get_user_playlists(token: &str) -> Result<Vec<Playlist>, reqwest::Error> {
    let mut page: GetUserPlaylistsResponse =
        get_json(token, "/me/playlists", &[("limit", "50".to_string())]).await?;
    let mut playlists = std::mem::take(&mut page.items);

    while let Some(next) = page.next.take() {
        page = get_json_url(token, &next, &[]).await?;
        playlists.append(&mut page.items);
    }

    Ok(playlists)
}

/// Collects the ids of every track in a playlist.
///
/// Removed tracks and local files carry no id and are skipped. Only the
/// `id` field of each item is requested to keep pages small.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Spotify playlist id
///
/// # Returns
///
/// Track ids in playlist order. Duplicates are kept; callers dedup.
///
/// # Errors
///
/// Returns a `reqwest::Error` if any page request fails.
pub async fn get_playlist_track_ids(
    token: &str,
    playlist_id: &str,
) -> Result<Vec<String>, reqwest::Error> {
    let mut page: PlaylistItemsResponse = get_json(
        token,
        &format!("/playlists/{}/tracks", playlist_id),
        &[
            ("limit", "100".to_string()),
            ("fields", "items(track(id)),next".to_string()),
        ],
    )
    .await?;

    let mut ids = Vec::new();
    loop {
        ids.extend(
            page.items
                .iter()
                .filter_map(|item| item.track.as_ref().and_then(|t| t.id.clone())),
        );

        match page.next.take() {
            Some(next) => page = get_json_url(token, &next, &[]).await?,
            None => break,
        }
    }

    Ok(ids)
}
