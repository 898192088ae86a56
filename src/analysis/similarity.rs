use serde::{Deserialize, Serialize};

use super::profile::MusicProfile;

pub const WEIGHT_DANCEABILITY: f64 = 0.20;
pub const WEIGHT_ENERGY: f64 = 0.20;
pub const WEIGHT_VALENCE: f64 = 0.20;
pub const WEIGHT_ACOUSTICNESS: f64 = 0.15;
pub const WEIGHT_TEMPO: f64 = 0.10;
pub const WEIGHT_LOUDNESS: f64 = 0.05;
pub const WEIGHT_KEY: f64 = 0.05;
pub const WEIGHT_MODE: f64 = 0.03;

/// Tempo difference (BPM) at which the tempo term reaches zero.
const TEMPO_SPAN: f64 = 200.0;
/// Loudness difference (dB) at which the loudness term reaches zero.
const LOUDNESS_SPAN: f64 = 60.0;

/// Weighted similarity between two profiles, clamped to `[0, 1]`.
///
/// NOTE: `WEIGHT_KEY` and `WEIGHT_MODE` are declared but no key or mode term
/// is added. Identical profiles therefore score 0.90, not 1.0. Scores are
/// compared against values produced by the dashboard, so the missing terms
/// stay missing.
pub fn similarity(a: &MusicProfile, b: &MusicProfile) -> f64 {
    let mut score = 0.0;

    score += closeness(a.avg_danceability, b.avg_danceability) * WEIGHT_DANCEABILITY;
    score += closeness(a.avg_energy, b.avg_energy) * WEIGHT_ENERGY;
    score += closeness(a.avg_valence, b.avg_valence) * WEIGHT_VALENCE;
    score += closeness(a.avg_acousticness, b.avg_acousticness) * WEIGHT_ACOUSTICNESS;

    let tempo_diff = (a.avg_tempo - b.avg_tempo).abs() / TEMPO_SPAN;
    score += (1.0 - tempo_diff).max(0.0) * WEIGHT_TEMPO;

    let loudness_diff = (a.avg_loudness - b.avg_loudness).abs() / LOUDNESS_SPAN;
    score += (1.0 - loudness_diff).max(0.0) * WEIGHT_LOUDNESS;

    score.clamp(0.0, 1.0)
}

fn closeness(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs()
}

/// Coarse bucket of a similarity score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimilarityBand {
    ExtremelySimilar,
    VerySimilar,
    Similar,
    SomewhatSimilar,
}

impl SimilarityBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            SimilarityBand::ExtremelySimilar
        } else if score > 0.6 {
            SimilarityBand::VerySimilar
        } else if score > 0.4 {
            SimilarityBand::Similar
        } else {
            SimilarityBand::SomewhatSimilar
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SimilarityBand::ExtremelySimilar => "🎯 Extremely similar",
            SimilarityBand::VerySimilar => "🔥 Very similar",
            SimilarityBand::Similar => "✨ Similar",
            SimilarityBand::SomewhatSimilar => "🌟 Somewhat similar",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SimilarityBand::ExtremelySimilar => "neon-pink",
            SimilarityBand::VerySimilar => "electric-purple",
            SimilarityBand::Similar => "sunset-orange",
            SimilarityBand::SomewhatSimilar => "mint-green",
        }
    }
}
