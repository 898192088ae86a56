//! # Analysis Module
//!
//! Pure functions that turn Spotify audio-feature vectors into music
//! profiles, mood categories, similarity scores and recommendation
//! parameters. Nothing in here performs I/O or holds mutable state, so
//! every function can be called from any number of tasks at once.
//!
//! ## Data Flow
//!
//! ```text
//! Spotify audio features (FeatureVector)
//!          ↓
//!     aggregate()  ──→  MusicProfile ──→ similarity()
//!          │                    └──────→ RecommendationParams::from_profile()
//!          ↓
//!     classify() / analyze_track()
//! ```
//!
//! ## Submodules
//!
//! - [`features`] - Raw per-track feature vector and feature names
//! - [`profile`] - Aggregation of many vectors into a [`MusicProfile`]
//! - [`mood`] - Static mood/genre category table and classification
//! - [`similarity`] - Weighted profile-to-profile similarity
//! - [`recommend`] - Recommendation query parameters derived from a profile
//! - [`track`] - Descriptive and technical breakdown of a single track

pub mod features;
pub mod mood;
pub mod profile;
pub mod recommend;
pub mod similarity;
pub mod track;

pub use features::{Feature, FeatureVector};
pub use mood::{
    Criteria, Interval, MOOD_CATEGORIES, MoodCategory, classify, classify_with, find_category,
};
pub use profile::{MusicProfile, aggregate};
pub use recommend::RecommendationParams;
pub use similarity::{SimilarityBand, similarity};
pub use track::{TrackAnalysis, analyze_track};
