//! Command-line and environment configuration for the console.

use std::path::PathBuf;

use clap::Parser;
use movie_core::DEFAULT_BASE_URL;

#[derive(Debug, Parser)]
#[command(name = "movie-console", version, about = "Browse and edit the movie catalog")]
pub struct Cli {
    /// Root of the catalog service, e.g. http://localhost:8080/movie
    #[arg(long, env = "MOVIE_API_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Only show movies of this genre on startup
    #[arg(long, env = "MOVIE_GENRE")]
    pub genre: Option<String>,

    /// Log destination; the terminal itself belongs to the UI
    #[arg(long, env = "MOVIE_LOG_FILE", default_value = "movie-console.log")]
    pub log_file: PathBuf,
}
