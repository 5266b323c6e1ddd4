use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hotentry::app::AppContext;
use hotentry::cli::{commands, BlockTarget, Cli, Commands};
use hotentry::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the table on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Some(Commands::Block { rule }) => match rule {
            BlockTarget::Domain { domain } => commands::block_domain(&ctx, &domain)?,
            BlockTarget::Word { word } => commands::block_word(&ctx, &word)?,
        },
        Some(Commands::Blocklist) => commands::list_blocklist(&ctx)?,
        None if cli.linkmode => commands::link_mode(&ctx, cli.popular).await?,
        None => commands::show_entries(&ctx, cli.popular).await?,
    }

    Ok(())
}
