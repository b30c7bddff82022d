use std::path::PathBuf;

use clap::Parser;

/// Interactive dashboard of video-game releases, scores and ratings.
#[derive(Debug, Parser)]
#[command(name = "games-dash", version, about)]
pub struct Cli {
    /// Dataset to load (.csv, .json or .parquet)
    #[arg(short, long, env = "GAMES_DASH_DATA", default_value = "games.csv")]
    pub data: PathBuf,
}
