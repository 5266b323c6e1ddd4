pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chv")]
#[command(about = "chv is CLI client for hatebu viewer", long_about = None)]
pub struct Cli {
    /// Order by bookmark count, most popular first
    #[arg(short, long)]
    pub popular: bool,

    /// Pick an entry interactively and open it in the browser
    #[arg(short, long)]
    pub linkmode: bool,

    /// Config file (default: ~/.config/hotentry/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a block rule
    Block {
        #[command(subcommand)]
        rule: BlockTarget,
    },
    /// Show the effective block list
    Blocklist,
}

#[derive(Subcommand)]
pub enum BlockTarget {
    /// Hide entries whose link contains DOMAIN
    Domain { domain: String },
    /// Hide entries whose title contains WORD
    Word { word: String },
}
