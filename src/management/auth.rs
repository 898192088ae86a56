use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token};

/// Seconds before the real expiry at which a token is treated as expired.
const EXPIRY_MARGIN: u64 = 240;

/// Owns the cached OAuth token and keeps it fresh.
///
/// The token lives in `tunescope/cache/token.json` under the local data
/// directory and is rewritten whenever it is refreshed.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    /// Wraps a freshly obtained token. Nothing is written until [`persist`].
    ///
    /// [`persist`]: TokenManager::persist
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    /// Loads the cached token from disk.
    ///
    /// # Errors
    ///
    /// Returns an error when no token has been cached yet (the user has not
    /// run `tunescope auth`) or the cache file is not valid token JSON.
    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self { token })
    }

    /// Writes the token to the cache file, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(path, json)
            .await
            .map_err(|e| e.to_string())
    }

    /// Returns an access token, refreshing and persisting it first when it
    /// is about to expire.
    ///
    /// # Errors
    ///
    /// Returns an error if the refresh request fails (for example a revoked
    /// refresh token) or the refreshed token cannot be persisted.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        if Self::is_expired(&self.token, Utc::now().timestamp() as u64) {
            self.token = spotify::auth::refresh_token(&self.token.refresh_token).await?;
            self.persist().await?;
        }

        Ok(self.token.access_token.clone())
    }

    /// Whether `token` expires within [`EXPIRY_MARGIN`] seconds of `now`
    /// (unix seconds).
    pub fn is_expired(token: &Token, now: u64) -> bool {
        now + EXPIRY_MARGIN >= token.obtained_at + token.expires_in
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tunescope/cache/token.json");
        path
    }
}
