use std::time::Duration;

use colored::{Color, ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    Res,
    analysis::FeatureVector,
    error,
    management::TokenManager,
    spotify, utils, warning,
};

/// Loads the cached token and refreshes it if needed. Exits when the user
/// has not authenticated yet.
pub(crate) async fn access_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(t) => t,
        Err(e) => error!(
            "Failed to load token. Please run tunescope auth\n Error: {}",
            e
        ),
    };

    match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => error!(
            "Failed to refresh token. Please run tunescope auth\n Error: {}",
            e
        ),
    }
}

pub(crate) fn spinner(msg: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Track ids given on the command line, or every track of `playlist`.
pub(crate) async fn resolve_track_ids(
    token: &str,
    mut ids: Vec<String>,
    playlist: Option<String>,
) -> Res<Vec<String>> {
    if let Some(playlist_id) = playlist {
        let pb = spinner("Fetching playlist tracks...");
        let result = spotify::playlists::get_playlist_track_ids(token, &playlist_id).await;
        pb.finish_and_clear();
        ids.extend(result?);
    }

    utils::dedup_ids(&mut ids);
    if ids.is_empty() {
        return Err("No tracks given. Pass track ids or --playlist <id>.".into());
    }
    Ok(ids)
}

/// Fetches audio features for `ids`, dropping tracks Spotify has no
/// analysis for.
pub(crate) async fn load_features(
    token: &str,
    ids: &[String],
) -> Res<Vec<(String, FeatureVector)>> {
    let pb = spinner("Fetching audio features...");
    let result = spotify::tracks::get_several_audio_features(token, ids).await;
    pb.finish_and_clear();

    let features: Vec<(String, FeatureVector)> = ids
        .iter()
        .cloned()
        .zip(result?)
        .filter_map(|(id, f)| f.map(|f| (id, f)))
        .collect();

    if features.len() < ids.len() {
        warning!(
            "No audio features available for {} of {} tracks.",
            ids.len() - features.len(),
            ids.len()
        );
    }
    Ok(features)
}

/// Maps the colour tokens of categories and similarity bands to terminal colours.
pub(crate) fn paint(text: &str, token: &str) -> ColoredString {
    let color = match token {
        "neon-pink" => Color::TrueColor {
            r: 255,
            g: 55,
            b: 95,
        },
        "sunset-orange" => Color::TrueColor {
            r: 255,
            g: 149,
            b: 0,
        },
        "electric-purple" => Color::TrueColor {
            r: 102,
            g: 126,
            b: 234,
        },
        "mint-green" => Color::Green,
        "ocean-blue" => Color::Blue,
        "premium-gradient" => Color::Cyan,
        _ => Color::White,
    };
    text.color(color).bold()
}
