use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token},
    utils, warning,
};

/// Initiates the complete OAuth 2.0 PKCE authentication flow with Spotify.
///
/// 1. Generates a PKCE code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits for the callback handler to exchange the code for a token
/// 5. Persists the token through [`TokenManager`]
///
/// # Arguments
///
/// * `shared_state` - Shared state holding the verifier and, once the callback
///   has run, the obtained token
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A missing client id, token persistence failures and timeouts terminate
///   the program with an error
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("Cannot start authentication: {}", e),
    };

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    // Store verifier before the callback can possibly be hit
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let redirect_uri = config::spotify_redirect_uri();
    let scope = config::spotify_scope();
    let auth_url = match reqwest::Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge", code_challenge.as_str()),
            ("code_challenge_method", "S256"),
            ("scope", scope.as_str()),
        ],
    ) {
        Ok(url) => url.to_string(),
        Err(e) => error!("Invalid authorization URL: {}", e),
    };

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state once per second for up to 60 seconds until the
/// callback handler has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may or may not rotate the refresh token; when the response carries
/// none, the one passed in is kept.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json, Some(refresh_token))
}

/// Exchanges the authorization code from the callback for an access token.
///
/// `verifier` must be the PKCE code verifier whose challenge was sent with
/// the authorization request.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;
    token_from_json(&json, None)
}

/// Builds a [`Token`] from a token endpoint response.
///
/// `previous_refresh` is used when the response omits `refresh_token`.
pub fn token_from_json(json: &Value, previous_refresh: Option<&str>) -> Result<Token, String> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or_else(|| format!("Token response without access_token: {}", json))?;

    let refresh_token = json["refresh_token"]
        .as_str()
        .or(previous_refresh)
        .ok_or_else(|| "Token response without refresh_token".to_string())?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: refresh_token.to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
