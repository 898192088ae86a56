use tabled::Table;

use crate::{
    Res,
    analysis::{self, FeatureVector, TrackAnalysis},
    cli::common::{access_token, paint, spinner},
    info, spotify,
    types::FeatureTableRow,
    utils, warning,
};

/// Shows mood, characteristics and technical data of a single track.
pub async fn analyze(track_id: String) {
    if let Err(e) = run(&track_id).await {
        warning!("Failed to analyze track {}. Err: {}", track_id, e);
    }
}

async fn run(track_id: &str) -> Res<()> {
    let token = access_token().await;

    let pb = spinner("Fetching track analysis...");
    let (track, features) = tokio::join!(
        spotify::tracks::get_track(&token, track_id),
        spotify::tracks::get_audio_features(&token, track_id)
    );
    pb.finish_and_clear();
    let (track, features) = (track?, features?);

    info!("{} - {}", track.name, utils::join_artist_names(&track));
    let analysis = analysis::analyze_track(&features);
    print_analysis(&features, &analysis);
    Ok(())
}

fn print_analysis(features: &FeatureVector, analysis: &TrackAnalysis) {
    match analysis.mood {
        Some(mood) => info!(
            "Mood: {} {} - {}",
            mood.emoji,
            paint(&mood.name, &mood.color),
            mood.description
        ),
        None => info!("Mood: uncategorized"),
    }

    let c = &analysis.characteristics;
    let t = &analysis.technical;
    let rows = vec![
        percent_row("Danceability", features.danceability, c.dance_floor),
        percent_row("Energy", features.energy, c.energy),
        percent_row("Valence", features.valence, c.emotion),
        percent_row("Acousticness", features.acousticness, c.acoustic),
        percent_row("Speechiness", features.speechiness, c.vocal),
        percent_row("Instrumentalness", features.instrumentalness, c.instrumental),
        row("Genre style", c.genre.clone()),
        row("Key", format!("{} {}", t.key, t.mode)),
        row("Time signature", t.time_signature.clone()),
        row("Tempo", t.tempo.clone()),
        row("Loudness", t.loudness.clone()),
    ];

    println!("{}", Table::new(rows));
}

fn percent_row(feature: &str, value: f64, label: &str) -> FeatureTableRow {
    row(
        feature,
        format!("{} ({})", utils::format_percent(value), label),
    )
}

fn row(feature: &str, value: String) -> FeatureTableRow {
    FeatureTableRow {
        feature: feature.to_string(),
        value,
    }
}
