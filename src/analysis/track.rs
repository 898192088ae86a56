use serde::Serialize;

use super::{
    features::FeatureVector,
    mood::{MoodCategory, classify},
};
use crate::utils::round_half_up;

const KEY_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Everything the dashboard shows about a single track, rebuilt from its
/// feature vector on every call.
#[derive(Debug, Clone, Serialize)]
pub struct TrackAnalysis {
    pub mood: Option<&'static MoodCategory>,
    pub characteristics: Characteristics,
    pub technical: Technical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Characteristics {
    pub dance_floor: &'static str,
    pub energy: &'static str,
    pub emotion: &'static str,
    pub acoustic: &'static str,
    pub vocal: &'static str,
    pub instrumental: &'static str,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Technical {
    pub key: &'static str,
    pub mode: &'static str,
    pub time_signature: String,
    pub tempo: String,
    pub loudness: String,
}

pub fn analyze_track(features: &FeatureVector) -> TrackAnalysis {
    TrackAnalysis {
        mood: classify(features),
        characteristics: Characteristics {
            dance_floor: tier(
                features.danceability,
                (0.7, "Dance floor ready"),
                (0.4, "Light groove"),
                "Laid-back",
            ),
            energy: tier(
                features.energy,
                (0.7, "High energy"),
                (0.4, "Medium energy"),
                "Low energy",
            ),
            emotion: tier(
                features.valence,
                (0.7, "Positive"),
                (0.4, "Neutral"),
                "Melancholic",
            ),
            acoustic: tier(
                features.acousticness,
                (0.7, "Acoustic"),
                (0.3, "Hybrid"),
                "Electronic",
            ),
            vocal: tier(
                features.speechiness,
                (0.66, "Speech-like"),
                (0.33, "Rap/Talk"),
                "Instrument-led",
            ),
            instrumental: if features.instrumentalness > 0.5 {
                "Instrumental"
            } else {
                "Vocal-led"
            },
            genre: genre_style(features),
        },
        technical: Technical {
            key: key_name(features.key),
            mode: if features.mode == 1 { "Major" } else { "Minor" },
            time_signature: format!("{}/4", features.time_signature),
            tempo: format!("{} BPM", round_half_up(features.tempo)),
            loudness: format!("{} dB", round_half_up(features.loudness)),
        },
    }
}

/// Category name of the track, falling back to coarse threshold rules when
/// no category region contains it.
pub fn genre_style(features: &FeatureVector) -> String {
    if let Some(category) = classify(features) {
        return category.name.clone();
    }

    let style = if features.energy > 0.8 && features.danceability > 0.7 {
        "EDM/Dance"
    } else if features.energy > 0.7 && features.acousticness < 0.3 {
        "Rock"
    } else if features.acousticness > 0.5 {
        "Acoustic"
    } else if features.danceability > 0.6 && features.valence > 0.5 {
        "Pop"
    } else if features.energy < 0.4 && features.instrumentalness > 0.3 {
        "Ambient/Chill"
    } else {
        "Other"
    };
    style.to_string()
}

pub fn key_name(key: i32) -> &'static str {
    usize::try_from(key)
        .ok()
        .and_then(|k| KEY_NAMES.get(k))
        .copied()
        .unwrap_or("Unknown")
}

fn tier(
    value: f64,
    high: (f64, &'static str),
    mid: (f64, &'static str),
    low: &'static str,
) -> &'static str {
    if value > high.0 {
        high.1
    } else if value > mid.0 {
        mid.1
    } else {
        low
    }
}
