//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that receives the
//! Spotify OAuth redirect.
//!
//! - [`callback`] - Completes the PKCE flow by exchanging the authorization
//!   code for an access token and storing it in the shared state.
//! - [`health`] - Returns status and version, handy to check the redirect
//!   address is reachable.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
