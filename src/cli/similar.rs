use tabled::Table;

use crate::{
    Res,
    analysis::{self, RecommendationParams, SimilarityBand},
    cli::common::{access_token, load_features, paint, spinner},
    info, spotify,
    types::{SimilarTrackTableRow, Track},
    utils, warning,
};

/// Number of recommendation candidates scored per seed track.
const CANDIDATES: u32 = 50;

/// Finds tracks similar to `track_id`: candidates come from the
/// recommendation endpoint and are ranked by profile similarity.
pub async fn similar(track_id: String, limit: usize) {
    if let Err(e) = run(&track_id, limit).await {
        warning!("Failed to find similar tracks for {}. Err: {}", track_id, e);
    }
}

async fn run(track_id: &str, limit: usize) -> Res<()> {
    let token = access_token().await;

    let pb = spinner("Fetching seed track...");
    let (track, features) = tokio::join!(
        spotify::tracks::get_track(&token, track_id),
        spotify::tracks::get_audio_features(&token, track_id)
    );
    pb.finish_and_clear();
    let (track, features) = (track?, features?);

    let seed_profile = analysis::aggregate(&[features]);
    let seed_analysis = analysis::analyze_track(&features);
    info!(
        "Seed: {} - {} ({})",
        track.name,
        utils::join_artist_names(&track),
        seed_analysis.characteristics.genre
    );

    let tuning = RecommendationParams::seed_targets(&features, CANDIDATES);

    let pb = spinner("Fetching recommendations...");
    let result = spotify::recommendations::get_recommendations_with(
        &token,
        &[track_id.to_string()],
        tuning,
    )
    .await;
    pb.finish_and_clear();
    let candidates: Vec<Track> = result?;

    if candidates.is_empty() {
        info!("No recommendations returned.");
        return Ok(());
    }

    let ids: Vec<String> = candidates.iter().map(|t| t.id.clone()).collect();
    let features = load_features(&token, &ids).await?;

    let mut scored: Vec<(f64, &Track, String)> = features
        .iter()
        .filter_map(|(id, f)| {
            let candidate = candidates.iter().find(|t| &t.id == id)?;
            let score = analysis::similarity(&seed_profile, &analysis::aggregate(&[*f]));
            let genre = analysis::analyze_track(f).characteristics.genre;
            Some((score, candidate, genre))
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(limit);

    if let Some((score, best, _)) = scored.first() {
        let band = SimilarityBand::from_score(*score);
        info!(
            "Best match: {} ({})",
            best.name,
            paint(band.label(), band.color())
        );
    }

    let rows: Vec<SimilarTrackTableRow> = scored
        .into_iter()
        .map(|(score, t, genre)| {
            let band = SimilarityBand::from_score(score);
            SimilarTrackTableRow {
                similarity: utils::format_percent(score),
                band: band.label().to_string(),
                name: t.name.clone(),
                artists: utils::join_artist_names(t),
                genre,
            }
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
