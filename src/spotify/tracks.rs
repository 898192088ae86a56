use crate::{
    analysis::FeatureVector,
    spotify::get_json,
    types::{SearchResponse, SeveralAudioFeaturesResponse, Track},
};

/// Maximum number of ids accepted by `GET /audio-features`.
pub const AUDIO_FEATURES_BATCH: usize = 100;

/// Searches the catalog for tracks matching `query`.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `query` - Free text search query, URL encoded by the client
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Returns
///
/// The tracks of the first result page, in Spotify's relevance order.
///
/// # Errors
///
/// Returns a `reqwest::Error` if the request fails, Spotify answers with a
/// non-success status (for example 401 for an expired token) or the body
/// cannot be deserialized.
pub async fn search_tracks(
    token: &str,
    query: &str,
    limit: u32,
) -> Result<Vec<Track>, reqwest::Error> {
    let res: SearchResponse = get_json(
        token,
        "/search",
        &[
            ("q", query.to_string()),
            ("type", "track".to_string()),
            ("limit", limit.to_string()),
        ],
    )
    .await?;

    Ok(res.tracks.items)
}

/// Retrieves catalog information for a single track.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `id` - Spotify track id (not the `spotify:track:` URI)
///
/// # Errors
///
/// Returns a `reqwest::Error` on network failure, a non-success status
/// (404 for unknown ids) or an unexpected response body.
pub async fn get_track(token: &str, id: &str) -> Result<Track, reqwest::Error> {
    get_json(token, &format!("/tracks/{}", id), &[]).await
}

/// Retrieves the audio feature vector of one track.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `id` - Spotify track id
///
/// # Errors
///
/// Returns a `reqwest::Error` if the request fails or Spotify has no
/// analysis for the track, in which case the endpoint answers 404.
pub async fn get_audio_features(token: &str, id: &str) -> Result<FeatureVector, reqwest::Error> {
    get_json(token, &format!("/audio-features/{}", id), &[]).await
}

/// Retrieves audio features for many tracks.
///
/// Ids are split into batches of [`AUDIO_FEATURES_BATCH`] which are fetched
/// concurrently. The result lines up with `ids`: tracks without analysis data
/// yield `None`.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `ids` - Track ids; any number, duplicates are passed through
///
/// # Errors
///
/// Returns the first `reqwest::Error` of any batch. A batch whose task
/// panicked is reported as `None` entries instead.
pub async fn get_several_audio_features(
    token: &str,
    ids: &[String],
) -> Result<Vec<Option<FeatureVector>>, reqwest::Error> {
    let mut handles = Vec::new();
    for chunk in ids.chunks(AUDIO_FEATURES_BATCH) {
        let token = token.to_string();
        let joined = chunk.join(",");
        let handle = tokio::spawn(async move {
            get_json::<SeveralAudioFeaturesResponse>(&token, "/audio-features", &[("ids", joined)])
                .await
        });
        handles.push((chunk.len(), handle));
    }

    let mut features = Vec::with_capacity(ids.len());
    for (len, handle) in handles {
        match handle.await {
            Ok(res) => features.extend(res?.audio_features),
            // a panicked task has no response, keep positions aligned
            Err(_) => features.extend(std::iter::repeat_n(None, len)),
        }
    }

    Ok(features)
}
