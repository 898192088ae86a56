use crate::{
    analysis::RecommendationParams,
    spotify::get_json,
    types::{RecommendationsResponse, Track},
};

/// Spotify accepts at most five seed values per request.
pub const MAX_SEEDS: usize = 5;

/// Requests recommendations seeded by `seed_tracks` and shaped by `params`.
///
/// Only the first [`MAX_SEEDS`] seeds are sent. The parameter bundle is
/// serialized into the query string as-is.
pub async fn get_recommendations(
    token: &str,
    seed_tracks: &[String],
    params: &RecommendationParams,
) -> Result<Vec<Track>, reqwest::Error> {
    get_recommendations_with(token, seed_tracks, params.to_query_pairs()).await
}

/// Like [`get_recommendations`], with caller-built tuning parameters.
pub async fn get_recommendations_with(
    token: &str,
    seed_tracks: &[String],
    tuning: Vec<(&'static str, String)>,
) -> Result<Vec<Track>, reqwest::Error> {
    let seeds = seed_tracks
        .iter()
        .take(MAX_SEEDS)
        .cloned()
        .collect::<Vec<_>>()
        .join(",");

    let mut query = vec![("seed_tracks", seeds)];
    query.extend(tuning);

    let res: RecommendationsResponse = get_json(token, "/recommendations", &query).await?;
    Ok(res.tracks)
}
