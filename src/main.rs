use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use tunescope::{cli, config, error, types::PkceToken};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Search tracks
    Search(SearchOptions),

    /// Analyze mood and audio features of a track
    Analyze(AnalyzeOptions),

    /// Build a music profile from several tracks or a playlist
    Profile(TrackSetOptions),

    /// Find tracks similar to a track
    Similar(SimilarOptions),

    /// Recommend tracks matching a music profile
    Recommend(RecommendOptions),

    /// List mood categories
    Moods,

    /// List your playlists
    Playlists,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    pub query: String,

    /// Maximum number of tracks to show (1-50)
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=50))]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeOptions {
    /// Spotify track id
    pub track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TrackSetOptions {
    /// Spotify track ids
    pub track_ids: Vec<String>,

    /// Use every track of this playlist
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SimilarOptions {
    /// Spotify track id to compare against
    pub track_id: String,

    /// Number of similar tracks to show
    #[clap(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendOptions {
    #[command(flatten)]
    pub tracks: TrackSetOptions,

    /// Bias recommendations toward a mood category (see `moods`)
    #[clap(long)]
    pub mood: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Analyze(opt) => cli::analyze(opt.track_id).await,
        Command::Profile(opt) => cli::profile(opt.track_ids, opt.playlist).await,
        Command::Similar(opt) => cli::similar(opt.track_id, opt.limit).await,
        Command::Recommend(opt) => {
            cli::recommend(opt.tracks.track_ids, opt.tracks.playlist, opt.mood).await
        }
        Command::Moods => cli::moods(),
        Command::Playlists => cli::playlists().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
