use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;

use cinetrack::app::AppContext;
use cinetrack::cli::{Cli, Command, Runner};
use cinetrack::config::Config;
use cinetrack::logging::init_tracing;
use cinetrack::storage::{FileStore, KeyValueStore, MemoryStore};
use cinetrack::tmdb::{DiscoverFeed, TmdbClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = Some(dir);
    }

    let store: Arc<dyn KeyValueStore> = if cli.ephemeral {
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(FileStore::open(config.storage.resolve_dir())?)
    };

    let ctx = AppContext::new(store);
    ctx.hydrate().await;

    let feed = DiscoverFeed::new(TmdbClient::new(config.tmdb.clone())?);
    let runner = Runner::new(ctx, feed);

    let mut stdout = std::io::stdout();
    match cli.command {
        Command::Shell => {
            runner
                .run_shell(BufReader::new(tokio::io::stdin()), &mut stdout)
                .await?
        }
        command => runner.execute(command, &mut stdout).await?,
    }
    Ok(())
}
