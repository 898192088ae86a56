//! Audio feature analytics for Spotify tracks.
//!
//! This library signs in to the Spotify Web API, fetches track metadata and
//! audio-feature vectors, and turns them into music profiles, mood
//! classifications, similarity scores and recommendation queries.
//!
//! # Modules
//!
//! - `analysis` - Pure profile, mood, similarity and recommendation logic
//! - `api` - HTTP endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token caching
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use tunescope::analysis::aggregate;
//!
//! let profile = aggregate(&[]);
//! assert_eq!(profile.avg_energy, 0.0);
//! ```

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used by command-level code. Boxed so that `reqwest`,
/// token and message errors can all be propagated with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational line prefixed with a blue `o`.
///
/// ```
/// info!("Found {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line prefixed with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line prefixed with a red `!` and exits with status 1.
///
/// Only for failures the program cannot continue from, such as a missing
/// token. The macro diverges, so it can stand in any match arm.
///
/// ```
/// let token = match load() {
///     Ok(t) => t,
///     Err(e) => error!("Failed to load token: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line prefixed with a yellow `!`, for recoverable issues
/// such as tracks without analysis data.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
