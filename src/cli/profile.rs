use std::collections::BTreeSet;

use tabled::Table;

use crate::{
    Res,
    analysis::{self, FeatureVector, MOOD_CATEGORIES, MusicProfile, track::key_name},
    cli::common::{access_token, load_features, paint, resolve_track_ids},
    info,
    types::FeatureTableRow,
    utils, warning,
};

/// Aggregates the given tracks (or a playlist) into a music profile and
/// shows how the tracks spread over the mood categories.
pub async fn profile(track_ids: Vec<String>, playlist: Option<String>) {
    if let Err(e) = run(track_ids, playlist).await {
        warning!("Failed to build music profile. Err: {}", e);
    }
}

async fn run(track_ids: Vec<String>, playlist: Option<String>) -> Res<()> {
    let token = access_token().await;
    let ids = resolve_track_ids(&token, track_ids, playlist).await?;
    let features: Vec<FeatureVector> = load_features(&token, &ids)
        .await?
        .into_iter()
        .map(|(_, f)| f)
        .collect();

    let profile = analysis::aggregate(&features);
    info!("Music profile over {} tracks", features.len());
    print_profile(&profile);
    print_mood_distribution(&features);
    Ok(())
}

pub(crate) fn print_profile(profile: &MusicProfile) {
    let rows = vec![
        row("Danceability", utils::format_percent(profile.avg_danceability)),
        row("Energy", utils::format_percent(profile.avg_energy)),
        row("Valence", utils::format_percent(profile.avg_valence)),
        row("Acousticness", utils::format_percent(profile.avg_acousticness)),
        row("Tempo", format!("{} BPM", utils::round_half_up(profile.avg_tempo))),
        row("Loudness", format!("{} dB", utils::round_half_up(profile.avg_loudness))),
        row("Preferred keys", join(&profile.preferred_keys, |k| key_name(k).to_string())),
        row("Preferred modes", join(&profile.preferred_modes, mode_name)),
        row(
            "Time signatures",
            join(&profile.time_signature_preferences, |t| format!("{}/4", t)),
        ),
    ];

    println!("{}", Table::new(rows));
}

fn print_mood_distribution(features: &[FeatureVector]) {
    let mut counts = vec![0usize; MOOD_CATEGORIES.len()];
    let mut uncategorized = 0;

    for f in features {
        match analysis::classify(f)
            .and_then(|c| MOOD_CATEGORIES.iter().position(|m| m.name == c.name))
        {
            Some(idx) => counts[idx] += 1,
            None => uncategorized += 1,
        }
    }

    for (category, count) in MOOD_CATEGORIES.iter().zip(counts) {
        if count > 0 {
            info!(
                "{} {}: {}",
                category.emoji,
                paint(&category.name, &category.color),
                count
            );
        }
    }
    if uncategorized > 0 {
        info!("Uncategorized: {}", uncategorized);
    }
}

fn mode_name(mode: i32) -> String {
    if mode == 1 { "Major" } else { "Minor" }.to_string()
}

fn join(values: &BTreeSet<i32>, fmt: impl Fn(i32) -> String) -> String {
    values
        .iter()
        .map(|v| fmt(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn row(feature: &str, value: String) -> FeatureTableRow {
    FeatureTableRow {
        feature: feature.to_string(),
        value,
    }
}
