use std::fmt;

use serde::{Deserialize, Serialize};

/// Audio characteristics of a single track as returned by the
/// `/audio-features` endpoint.
///
/// The Spotify response carries more fields (`id`, `uri`, `analysis_url`, ...);
/// those are ignored during deserialization. Values are taken as-is and never
/// validated, so out-of-range data from the API flows straight into the
/// arithmetic of the analysis functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub danceability: f64,
    pub energy: f64,
    pub acousticness: f64,
    pub valence: f64,
    pub speechiness: f64,
    pub instrumentalness: f64,
    /// Beats per minute.
    pub tempo: f64,
    /// Decibels, usually negative.
    pub loudness: f64,
    /// Pitch class 0-11, `-1` when no key was detected.
    pub key: i32,
    /// `0` minor, `1` major.
    pub mode: i32,
    pub time_signature: i32,
}

impl FeatureVector {
    /// Returns the numeric value of the given feature.
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Danceability => self.danceability,
            Feature::Energy => self.energy,
            Feature::Acousticness => self.acousticness,
            Feature::Valence => self.valence,
            Feature::Speechiness => self.speechiness,
            Feature::Instrumentalness => self.instrumentalness,
            Feature::Tempo => self.tempo,
            Feature::Loudness => self.loudness,
        }
    }
}

/// Names of the continuous features a [`FeatureVector`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Danceability,
    Energy,
    Acousticness,
    Valence,
    Speechiness,
    Instrumentalness,
    Tempo,
    Loudness,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Acousticness => "acousticness",
            Feature::Valence => "valence",
            Feature::Speechiness => "speechiness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Tempo => "tempo",
            Feature::Loudness => "loudness",
        };
        write!(f, "{}", s)
    }
}
