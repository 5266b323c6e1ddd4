use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum HotentryError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Select prompt failed: {0}")]
    Prompt(String),

    #[error("Not supported OS: {0}")]
    Platform(String),

    #[error("Open browser failed: {0}")]
    BrowserLaunch(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HotentryError>;
