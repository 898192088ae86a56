use tabled::Table;

use crate::{
    Res,
    analysis::{self, FeatureVector, MOOD_CATEGORIES, RecommendationParams, find_category},
    cli::{
        common::{access_token, load_features, paint, resolve_track_ids, spinner},
        profile::print_profile,
    },
    info, spotify,
    types::{FeatureTableRow, TrackTableRow},
    utils, warning,
};

/// Recommends tracks matching the profile of the given tracks, optionally
/// pulled toward a mood category.
pub async fn recommend(track_ids: Vec<String>, playlist: Option<String>, mood: Option<String>) {
    if let Err(e) = run(track_ids, playlist, mood).await {
        warning!("Failed to fetch recommendations. Err: {}", e);
    }
}

async fn run(track_ids: Vec<String>, playlist: Option<String>, mood: Option<String>) -> Res<()> {
    let token = access_token().await;
    let ids = resolve_track_ids(&token, track_ids, playlist).await?;
    let features: Vec<FeatureVector> = load_features(&token, &ids)
        .await?
        .into_iter()
        .map(|(_, f)| f)
        .collect();

    let profile = analysis::aggregate(&features);
    print_profile(&profile);

    match mood.as_deref().map(|m| (m, find_category(&MOOD_CATEGORIES, m))) {
        Some((_, Some(category))) => info!(
            "Biased toward {} {}",
            category.emoji,
            paint(&category.name, &category.color)
        ),
        Some((name, None)) => warning!(
            "Unknown mood \"{}\", recommending from profile only. See tunescope moods.",
            name
        ),
        None => {}
    }

    let params = RecommendationParams::from_profile(&profile, mood.as_deref());
    let param_rows: Vec<FeatureTableRow> = params
        .to_query_pairs()
        .into_iter()
        .map(|(feature, value)| FeatureTableRow {
            feature: feature.to_string(),
            value,
        })
        .collect();
    println!("{}", Table::new(param_rows));

    let pb = spinner("Fetching recommendations...");
    let result = spotify::recommendations::get_recommendations(&token, &ids, &params).await;
    pb.finish_and_clear();
    let tracks = result?;

    if tracks.is_empty() {
        info!("No recommendations returned.");
        return Ok(());
    }

    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            id: t.id.clone(),
            name: t.name.clone(),
            artists: utils::join_artist_names(t),
            duration: utils::format_duration(t.duration_ms),
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
