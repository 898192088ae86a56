use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::features::FeatureVector;

/// Aggregated listening profile over one or more tracks.
///
/// Numeric fields are arithmetic means, the set fields hold every value tied
/// for the highest frequency. A profile built from no tracks has all numeric
/// fields at `0.0` and all sets empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MusicProfile {
    pub avg_danceability: f64,
    pub avg_energy: f64,
    pub avg_acousticness: f64,
    pub avg_valence: f64,
    pub avg_tempo: f64,
    pub avg_loudness: f64,
    pub preferred_keys: BTreeSet<i32>,
    pub preferred_modes: BTreeSet<i32>,
    pub time_signature_preferences: BTreeSet<i32>,
    /// Reserved for genre data; never filled by [`aggregate`].
    pub genre_preferences: Vec<String>,
}

/// Reduces a list of feature vectors to a single [`MusicProfile`].
///
/// Never fails: an empty slice yields [`MusicProfile::default`].
pub fn aggregate(vectors: &[FeatureVector]) -> MusicProfile {
    if vectors.is_empty() {
        return MusicProfile::default();
    }

    MusicProfile {
        avg_danceability: mean(vectors, |v| v.danceability),
        avg_energy: mean(vectors, |v| v.energy),
        avg_acousticness: mean(vectors, |v| v.acousticness),
        avg_valence: mean(vectors, |v| v.valence),
        avg_tempo: mean(vectors, |v| v.tempo),
        avg_loudness: mean(vectors, |v| v.loudness),
        preferred_keys: most_frequent(vectors.iter().map(|v| v.key)),
        preferred_modes: most_frequent(vectors.iter().map(|v| v.mode)),
        time_signature_preferences: most_frequent(vectors.iter().map(|v| v.time_signature)),
        genre_preferences: Vec::new(),
    }
}

fn mean(vectors: &[FeatureVector], field: impl Fn(&FeatureVector) -> f64) -> f64 {
    if vectors.is_empty() {
        return 0.0;
    }
    vectors.iter().map(field).sum::<f64>() / vectors.len() as f64
}

/// All values sharing the highest occurrence count.
fn most_frequent(values: impl Iterator<Item = i32>) -> BTreeSet<i32> {
    let mut frequency: HashMap<i32, usize> = HashMap::new();
    for value in values {
        *frequency.entry(value).or_insert(0) += 1;
    }

    let Some(max) = frequency.values().copied().max() else {
        return BTreeSet::new();
    };

    frequency
        .into_iter()
        .filter(|(_, count)| *count == max)
        .map(|(value, _)| value)
        .collect()
}
