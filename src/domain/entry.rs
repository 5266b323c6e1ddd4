use chrono::{DateTime, FixedOffset};
use sha2::{Digest, Sha256};

/// One hot entry as it appears in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub date: String,
    pub bookmark_count: u32,
    pub image_url: Option<String>,
}

impl Entry {
    pub fn new(title: impl Into<String>, link: impl Into<String>, bookmark_count: u32) -> Self {
        let link = link.into();
        Self {
            id: Self::generate_id(&link),
            title: title.into(),
            link,
            description: String::new(),
            date: String::new(),
            bookmark_count,
            image_url: None,
        }
    }

    /// Generate a deterministic ID from the entry link
    pub fn generate_id(link: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(link.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Parse the `dc:date` value, which Hatena publishes as RFC 3339.
    pub fn published_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date.trim())
            .or_else(|_| DateTime::parse_from_rfc2822(self.date.trim()))
            .ok()
    }

    /// Date for display, falling back to the raw feed value.
    pub fn display_date(&self) -> String {
        self.published_at()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| self.date.clone())
    }
}
