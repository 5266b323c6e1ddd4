//! Configuration management for hotentry.
//!
//! Configuration is read from `~/.config/hotentry/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod colors;

pub use colors::ColorConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_FEED_URL: &str = "http://b.hatena.ne.jp/hotentry/it.rss";
pub const DEFAULT_PORT: u16 = 8080;

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub blocklist: BlocklistConfig,
    pub terminal: TerminalConfig,
    pub html: HtmlConfig,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub colors: ColorConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub url: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FEED_URL.to_string(),
        }
    }
}

/// Static block rules applied on top of the ones registered in the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlocklistConfig {
    pub domains: Vec<String>,
    pub words: Vec<String>,
}

impl Default for BlocklistConfig {
    fn default() -> Self {
        Self {
            domains: [
                "anond.hatelabo.jp",
                "togetter.com",
                "gizmodo.jp",
                "blog.livedoor.jp",
                "twitter.com",
                "x.com",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            words: [
                "ハッとした",
                "常識",
                "残念",
                "必見",
                "政治",
                "ヤバい",
                "初心者",
                "驚愕",
                "遺憾",
                "駆け出し",
                "マルチ",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub title_width: usize,
    pub url_width: usize,
    /// Rows visible at once in link mode
    pub page_size: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            title_width: 50,
            url_width: 100,
            page_size: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub title_width: usize,
    pub url_width: usize,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            title_width: 200,
            url_width: 200,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file; defaults to `<data_dir>/hotentry/hotentry.db`
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
            return Ok(Self::default().with_env_overrides()?);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.with_env_overrides()
    }

    /// Get the default config file path: `~/.config/hotentry/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("hotentry").join("config.toml"))
    }

    /// Apply the `PORT` environment variable on top of the file values.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        self.with_port_override(port.as_deref())
    }

    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = port.map(str::trim).filter(|p| !p.is_empty()) {
            self.server.port = port.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: port.to_string(),
            })?;
        }
        Ok(self)
    }

    /// Validated feed URL.
    pub fn feed_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.feed.url)
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(path = %path.display(), "wrote default configuration");
        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> &'static str {
        r##"# hotentry configuration
#
# Colors can be specified as:
# - Named colors: Black, Red, Green, Yellow, Blue, Magenta, Cyan, Gray,
#   DarkGray, LightRed, LightGreen, LightYellow, LightBlue, LightMagenta,
#   LightCyan, White, Reset
# - Hex colors: "#RRGGBB" or "#RGB"

[feed]
url = "http://b.hatena.ne.jp/hotentry/it.rss"

# Entries whose link contains one of `domains` or whose title contains one
# of `words` are hidden. Rules registered from the web form or with
# `chv block` are added to these.
[blocklist]
domains = [
    "anond.hatelabo.jp",
    "togetter.com",
    "gizmodo.jp",
    "blog.livedoor.jp",
    "twitter.com",
    "x.com",
]
words = [
    "ハッとした",
    "常識",
    "残念",
    "必見",
    "政治",
    "ヤバい",
    "初心者",
    "驚愕",
    "遺憾",
    "駆け出し",
    "マルチ",
]

# Column caps for the terminal table (display columns)
[terminal]
title_width = 50
url_width = 100
page_size = 30

[html]
title_width = 200
url_width = 200

# The PORT environment variable overrides `port`
[server]
host = "127.0.0.1"
port = 8080

# [store]
# path = "/path/to/hotentry.db"

[colors]
bookmark_count = "Yellow"
title = "Cyan"
selection_fg = "Black"
selection_bg = "Cyan"
"##
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
