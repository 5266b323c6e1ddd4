//! Filter and format stage between the parser and the presenters.
//!
//! Column widths are measured over the whole feed, then the entries are
//! optionally sorted by popularity, blocked ones are dropped, and the rest
//! become [`RenderRow`]s truncated (and, for the terminal, padded) to fit.

pub mod text;

use crate::config::Config;
use crate::domain::{BlockList, Entry};

use self::text::{display_width, fit, truncate};

/// Width of the bookmark count column.
pub const BOOKMARK_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Monospace table: fields are truncated and padded to the column width.
    Terminal,
    /// Markup does the layout: fields are only truncated.
    Html,
}

/// Per-invocation formatting switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub popular: bool,
    pub title_cap: usize,
    pub url_cap: usize,
    pub mode: RenderMode,
}

impl FormatOptions {
    pub fn terminal(config: &Config, popular: bool) -> Self {
        Self {
            popular,
            title_cap: config.terminal.title_width,
            url_cap: config.terminal.url_width,
            mode: RenderMode::Terminal,
        }
    }

    pub fn html(config: &Config) -> Self {
        Self {
            popular: false,
            title_cap: config.html.title_width,
            url_cap: config.html.url_width,
            mode: RenderMode::Html,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub bookmark: usize,
    pub title: usize,
    pub url: usize,
}

impl Columns {
    pub fn total(&self) -> usize {
        self.bookmark + self.title + self.url
    }
}

/// Display view of one surviving entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub entry_id: String,
    pub bookmark_count: String,
    pub title: String,
    pub url: String,
    /// The untouched entry link, for opening and hrefs.
    pub link: String,
    pub description: String,
    pub date: String,
    pub image_url: Option<String>,
}

impl RenderRow {
    /// Pipe-delimited picker line; title and URL share the title column width.
    pub fn picker_line(&self, columns: &Columns) -> String {
        format!(
            " {:<width$} | {} | {}",
            self.bookmark_count,
            fit(&self.title, columns.title),
            fit(&self.link, columns.title),
            width = columns.bookmark,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub columns: Columns,
    pub rows: Vec<RenderRow>,
}

impl Rendered {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn column_widths(entries: &[Entry], title_cap: usize, url_cap: usize) -> Columns {
    let title = entries.iter().map(|e| display_width(&e.title)).max().unwrap_or(0);
    let url = entries.iter().map(|e| display_width(&e.link)).max().unwrap_or(0);

    Columns {
        bookmark: BOOKMARK_WIDTH,
        title: title.min(title_cap),
        url: url.min(url_cap),
    }
}

/// Stable sort, most bookmarked first.
pub fn sort_by_popularity(entries: &mut [Entry]) {
    entries.sort_by(|a, b| b.bookmark_count.cmp(&a.bookmark_count));
}

pub fn filter_blocked(entries: Vec<Entry>, blocklist: &BlockList) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|e| {
            let blocked = blocklist.matches(e);
            if blocked {
                tracing::debug!(title = %e.title, link = %e.link, "entry blocked");
            }
            !blocked
        })
        .collect()
}

pub fn render(mut entries: Vec<Entry>, blocklist: &BlockList, opts: &FormatOptions) -> Rendered {
    let columns = column_widths(&entries, opts.title_cap, opts.url_cap);

    if opts.popular {
        sort_by_popularity(&mut entries);
    }

    let total = entries.len();
    let entries = filter_blocked(entries, blocklist);
    tracing::debug!(total, kept = entries.len(), "entries filtered");

    let shape = |text: &str, width: usize| match opts.mode {
        RenderMode::Terminal => fit(text, width),
        RenderMode::Html => truncate(text, width),
    };

    let rows = entries
        .into_iter()
        .map(|e| RenderRow {
            bookmark_count: e.bookmark_count.to_string(),
            title: shape(&e.title, columns.title),
            url: shape(&e.link, columns.url),
            date: e.display_date(),
            entry_id: e.id,
            link: e.link,
            description: e.description,
            image_url: e.image_url,
        })
        .collect();

    Rendered { columns, rows }
}
