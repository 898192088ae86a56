//! Configuration management for tunescope.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings and endpoint
//! URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const DEFAULT_SCOPE: &str = "user-read-email user-read-private user-library-read \
     playlist-read-private playlist-read-collaborative";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `tunescope/.env` inside the platform-specific
/// local data directory:
/// - Linux: `~/.local/share/tunescope/.env`
/// - macOS: `~/Library/Application Support/tunescope/.env`
/// - Windows: `%LOCALAPPDATA%/tunescope/.env`
///
/// A missing `.env` file is not an error; values may still come from the
/// process environment or fall back to defaults.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the `.env`
/// file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tunescope/.env");
    path
}

fn required(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{} must be set", key))
}

fn or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client ID of the registered Spotify application (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// There is no sensible default, so a missing variable is reported as an error.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// OAuth redirect URI (`SPOTIFY_API_REDIRECT_URI`). Must match the URI
/// registered in the Spotify application settings.
pub fn spotify_redirect_uri() -> String {
    or_default("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Space separated permission scopes (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    or_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Token exchange and refresh endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}
