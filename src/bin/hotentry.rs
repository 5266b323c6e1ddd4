use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hotentry::app::AppContext;
use hotentry::config::Config;

#[derive(Parser)]
#[command(name = "hotentry")]
#[command(about = "Serve the Hatena hot entry list with a block list form", long_about = None)]
struct Args {
    /// Config file (default: ~/.config/hotentry/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hotentry=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let ctx = AppContext::new(config)?;

    hotentry::web::serve(Arc::new(ctx)).await?;
    Ok(())
}
