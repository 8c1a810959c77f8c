//! Parse configuration, point the API client at the catalog, load the first
//! page of movies and hand control to the terminal loop.
use anyhow::Context;
use clap::Parser;
use movie_console::{init_logger, run_app, App, Cli};
use movie_core::{MovieApi, MovieClient, UreqTransport};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(&cli.log_file)?;

    let client = MovieClient::new(&cli.base_url)
        .with_context(|| format!("cannot use {} as the catalog url", cli.base_url))?;
    info!(base_url = client.base_url(), "starting movie console");

    let mut app = App::new(MovieApi::new(client, UreqTransport::new()), cli.genre);
    app.refresh();
    run_app(&mut app)
}
