use std::{collections::BTreeMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use super::features::{Feature, FeatureVector};

/// Closed interval `[min, max]` over a feature value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// Feature ranges a track must fall into to belong to a category.
///
/// `energy` and `valence` are always checked. Any other feature only takes
/// part when it has an interval in the optional map. Each feature has at most
/// one interval: energy and valence never appear in the optional map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CriteriaFields")]
pub struct Criteria {
    pub energy: Interval,
    pub valence: Interval,
    #[serde(default)]
    optional: BTreeMap<Feature, Interval>,
}

#[derive(Deserialize)]
struct CriteriaFields {
    energy: Interval,
    valence: Interval,
    #[serde(default)]
    optional: BTreeMap<Feature, Interval>,
}

impl TryFrom<CriteriaFields> for Criteria {
    type Error = String;

    fn try_from(fields: CriteriaFields) -> Result<Self, Self::Error> {
        if let Some(feature) = fields
            .optional
            .keys()
            .find(|f| matches!(f, Feature::Energy | Feature::Valence))
        {
            return Err(format!(
                "{} is a mandatory criterion and cannot be listed as optional",
                feature
            ));
        }
        Ok(Self {
            energy: fields.energy,
            valence: fields.valence,
            optional: fields.optional,
        })
    }
}

impl Criteria {
    pub fn new(energy: Interval, valence: Interval) -> Self {
        Self {
            energy,
            valence,
            optional: BTreeMap::new(),
        }
    }

    /// Sets the interval for `feature`, replacing any previous one.
    /// Energy and valence replace the mandatory ranges.
    pub fn with(mut self, feature: Feature, interval: Interval) -> Self {
        match feature {
            Feature::Energy => self.energy = interval,
            Feature::Valence => self.valence = interval,
            other => {
                self.optional.insert(other, interval);
            }
        }
        self
    }

    /// Interval for `feature`, including the mandatory ones.
    pub fn interval(&self, feature: Feature) -> Option<Interval> {
        match feature {
            Feature::Energy => Some(self.energy),
            Feature::Valence => Some(self.valence),
            other => self.optional.get(&other).copied(),
        }
    }

    /// Optional criteria in feature order.
    pub fn optional(&self) -> impl Iterator<Item = (Feature, Interval)> + '_ {
        self.optional.iter().map(|(f, i)| (*f, *i))
    }

    pub fn matches(&self, vector: &FeatureVector) -> bool {
        self.energy.contains(vector.energy)
            && self.valence.contains(vector.valence)
            && self
                .optional
                .iter()
                .all(|(feature, interval)| interval.contains(vector.value(*feature)))
    }
}

/// A named rectangular region in feature space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub name: String,
    pub description: String,
    /// Opaque colour token, interpreted by whatever renders the category.
    pub color: String,
    pub emoji: String,
    pub criteria: Criteria,
}

impl MoodCategory {
    fn new(name: &str, description: &str, color: &str, emoji: &str, criteria: Criteria) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            emoji: emoji.to_string(),
            criteria,
        }
    }
}

/// Built-in category table. Order matters: classification returns the first
/// category that matches.
pub static MOOD_CATEGORIES: LazyLock<Vec<MoodCategory>> = LazyLock::new(|| {
    vec![
        MoodCategory::new(
            "Pop",
            "Catchy, easy-listening pop music",
            "neon-pink",
            "🎵",
            Criteria::new(Interval::new(0.4, 0.8), Interval::new(0.5, 1.0))
                .with(Feature::Danceability, Interval::new(0.4, 0.8)),
        ),
        MoodCategory::new(
            "Rock",
            "Powerful, driving rock sound",
            "sunset-orange",
            "🎸",
            Criteria::new(Interval::new(0.6, 1.0), Interval::new(0.3, 0.8))
                .with(Feature::Acousticness, Interval::new(0.0, 0.4)),
        ),
        MoodCategory::new(
            "EDM/Dance",
            "Danceable electronic music",
            "electric-purple",
            "💃",
            Criteria::new(Interval::new(0.6, 1.0), Interval::new(0.4, 1.0))
                .with(Feature::Danceability, Interval::new(0.7, 1.0))
                .with(Feature::Acousticness, Interval::new(0.0, 0.3)),
        ),
        MoodCategory::new(
            "Acoustic",
            "Natural sound built on live instruments",
            "mint-green",
            "🎼",
            Criteria::new(Interval::new(0.2, 0.7), Interval::new(0.3, 0.8))
                .with(Feature::Acousticness, Interval::new(0.5, 1.0)),
        ),
        MoodCategory::new(
            "Hip-Hop/R&B",
            "Groovy hip-hop and R&B",
            "ocean-blue",
            "🎤",
            Criteria::new(Interval::new(0.4, 0.9), Interval::new(0.2, 0.8))
                .with(Feature::Danceability, Interval::new(0.6, 1.0)),
        ),
        MoodCategory::new(
            "Ambient/Chill",
            "Relaxing ambient and chill-out music",
            "premium-gradient",
            "🌙",
            Criteria::new(Interval::new(0.0, 0.5), Interval::new(0.2, 0.7))
                .with(Feature::Instrumentalness, Interval::new(0.3, 1.0)),
        ),
    ]
});

/// Classifies a track against the built-in [`MOOD_CATEGORIES`].
pub fn classify(vector: &FeatureVector) -> Option<&'static MoodCategory> {
    classify_with(&MOOD_CATEGORIES, vector)
}

/// First category in `categories` whose criteria contain `vector`, or `None`
/// when the track falls outside every region.
pub fn classify_with<'a>(
    categories: &'a [MoodCategory],
    vector: &FeatureVector,
) -> Option<&'a MoodCategory> {
    categories.iter().find(|c| c.criteria.matches(vector))
}

/// Looks up a category by its exact name.
pub fn find_category<'a>(categories: &'a [MoodCategory], name: &str) -> Option<&'a MoodCategory> {
    categories.iter().find(|c| c.name == name)
}
