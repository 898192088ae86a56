//! # CLI Module
//!
//! Command implementations for tunescope. Each command loads a valid access
//! token, talks to Spotify through [`crate::spotify`], runs the pure
//! functions from [`crate::analysis`] and renders the result as tables and
//! coloured status lines.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE sign-in
//! - [`search`] - Track search
//! - [`analyze`] - Mood, characteristics and technical data of one track
//! - [`profile`] - Aggregate profile and mood distribution of many tracks
//! - [`similar`] - Recommendation candidates ranked by similarity to a track
//! - [`recommend`] - Recommendations from a profile, optionally mood-biased
//! - [`moods`] - The built-in mood category table
//! - [`playlists`] - The user's playlists, to pick ids for `--playlist`
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (rendering, progress)
//!     ↓
//! Analysis (pure)   Management (token cache)
//!     ↓                   ↓
//! Spotify Integration (HTTP)
//! ```
//!
//! Failures inside a command are reported with `warning!`; a missing or
//! unrefreshable token ends the program with `error!`.

mod analyze;
mod auth;
mod common;
mod moods;
mod playlists;
mod profile;
mod recommend;
mod search;
mod similar;

pub use analyze::analyze;
pub use auth::auth;
pub use moods::moods;
pub use playlists::playlists;
pub use profile::profile;
pub use recommend::recommend;
pub use search::search;
pub use similar::similar;
