use serde::{Deserialize, Serialize};

use super::{
    features::{Feature, FeatureVector},
    mood::{MOOD_CATEGORIES, MoodCategory, find_category},
    profile::MusicProfile,
};
use crate::utils::round_half_up;

/// Number of tracks requested from the recommendation endpoint.
pub const DEFAULT_LIMIT: u32 = 20;
/// Half-width of the energy and valence tolerance bands.
pub const TOLERANCE: f64 = 0.2;

/// Flat parameter bundle for the `/recommendations` endpoint.
///
/// Field names match the query parameter names, so the struct serializes
/// directly into a query string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationParams {
    pub target_danceability: f64,
    pub target_energy: f64,
    pub target_valence: f64,
    pub target_acousticness: f64,
    pub target_tempo: i64,
    pub target_loudness: i64,
    pub limit: u32,
    pub min_energy: f64,
    pub max_energy: f64,
    pub min_valence: f64,
    pub max_valence: f64,
}

impl RecommendationParams {
    /// Builds the bundle from `profile`, optionally biased toward one of the
    /// built-in categories.
    pub fn from_profile(profile: &MusicProfile, bias_category: Option<&str>) -> Self {
        Self::from_profile_with(&MOOD_CATEGORIES, profile, bias_category)
    }

    /// Same as [`RecommendationParams::from_profile`] against an explicit
    /// category table. An unknown bias name is ignored.
    pub fn from_profile_with(
        categories: &[MoodCategory],
        profile: &MusicProfile,
        bias_category: Option<&str>,
    ) -> Self {
        let mut params = Self {
            target_danceability: profile.avg_danceability,
            target_energy: profile.avg_energy,
            target_valence: profile.avg_valence,
            target_acousticness: profile.avg_acousticness,
            target_tempo: round_half_up(profile.avg_tempo),
            target_loudness: round_half_up(profile.avg_loudness),
            limit: DEFAULT_LIMIT,
            min_energy: 0.0,
            max_energy: 0.0,
            min_valence: 0.0,
            max_valence: 0.0,
        };

        if let Some(category) = bias_category.and_then(|name| find_category(categories, name)) {
            let criteria = &category.criteria;
            params.target_energy = criteria.energy.midpoint();
            params.target_valence = criteria.valence.midpoint();
            if let Some(interval) = criteria.interval(Feature::Danceability) {
                params.target_danceability = interval.midpoint();
            }
            if let Some(interval) = criteria.interval(Feature::Acousticness) {
                params.target_acousticness = interval.midpoint();
            }
        }

        params.min_energy = (params.target_energy - TOLERANCE).max(0.0);
        params.max_energy = (params.target_energy + TOLERANCE).min(1.0);
        params.min_valence = (params.target_valence - TOLERANCE).max(0.0);
        params.max_valence = (params.target_valence + TOLERANCE).min(1.0);

        params
    }

    /// Target-only query for a single seed track: the track's own feature
    /// values, no loudness target and no min/max bands, so the candidate pool
    /// is not narrowed before scoring.
    pub fn seed_targets(vector: &FeatureVector, limit: u32) -> Vec<(&'static str, String)> {
        vec![
            ("target_energy", vector.energy.to_string()),
            ("target_danceability", vector.danceability.to_string()),
            ("target_valence", vector.valence.to_string()),
            ("target_acousticness", vector.acousticness.to_string()),
            ("target_tempo", round_half_up(vector.tempo).to_string()),
            ("limit", limit.to_string()),
        ]
    }

    /// Key/value pairs ready to be appended to a request URL.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("target_danceability", self.target_danceability.to_string()),
            ("target_energy", self.target_energy.to_string()),
            ("target_valence", self.target_valence.to_string()),
            ("target_acousticness", self.target_acousticness.to_string()),
            ("target_tempo", self.target_tempo.to_string()),
            ("target_loudness", self.target_loudness.to_string()),
            ("limit", self.limit.to_string()),
            ("min_energy", self.min_energy.to_string()),
            ("max_energy", self.max_energy.to_string()),
            ("min_valence", self.min_valence.to_string()),
            ("max_valence", self.max_valence.to_string()),
        ]
    }
}
