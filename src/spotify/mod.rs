//! # Spotify Integration Module
//!
//! Thin client for the parts of the Spotify Web API tunescope needs. Every
//! function takes an already valid access token (see
//! [`crate::management::TokenManager`]) and returns the decoded JSON response.
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer
//!     ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 PKCE)
//!     ├── Tracks (search, metadata, audio features)
//!     ├── Playlists (user playlists, playlist items)
//!     └── Recommendations
//!     ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Error Handling
//!
//! Request helpers return `reqwest::Error`; non-success status codes are
//! converted with `error_for_status()`. Requests are not retried.

pub mod auth;
pub mod playlists;
pub mod recommendations;
pub mod tracks;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config;

/// Performs an authenticated `GET` against `{SPOTIFY_API_URL}{path}` and decodes
/// the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    token: &str,
    path: &str,
    query: &[(&str, String)],
) -> Result<T, reqwest::Error> {
    let api_url = format!("{uri}{path}", uri = &config::spotify_apiurl(), path = path);
    get_json_url(token, &api_url, query).await
}

/// Like [`get_json`] but for absolute URLs, e.g. the `next` link of a page.
pub(crate) async fn get_json_url<T: DeserializeOwned>(
    token: &str,
    url: &str,
    query: &[(&str, String)],
) -> Result<T, reqwest::Error> {
    let client = Client::new();
    client
        .get(url)
        .bearer_auth(token)
        .query(query)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await
}
