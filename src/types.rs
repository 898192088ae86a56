use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::analysis::FeatureVector;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    pub album: Option<TrackAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralAudioFeaturesResponse {
    pub audio_features: Vec<Option<FeatureVector>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub collaborative: bool,
    pub tracks: Option<PlaylistTracksRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksRef {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemsResponse {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// `None` for tracks that were removed from the catalog.
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    /// Local files have no id.
    pub id: Option<String>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub id: String,
    pub name: String,
    pub artists: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct SimilarTrackTableRow {
    pub similarity: String,
    pub band: String,
    pub name: String,
    pub artists: String,
    pub genre: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub id: String,
    pub name: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct MoodTableRow {
    pub emoji: String,
    pub name: String,
    pub description: String,
    pub criteria: String,
}

#[derive(Tabled)]
pub struct FeatureTableRow {
    pub feature: String,
    pub value: String,
}
