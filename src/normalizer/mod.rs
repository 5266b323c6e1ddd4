use html_escape::decode_html_entities;
use roxmltree::{Document, Node};

use crate::app::{HotentryError, Result};
use crate::domain::Entry;

/// Turns a hot entry RSS document into [`Entry`] values.
///
/// Hatena publishes RSS 1.0 with `dc:` and `hatena:` extension elements, so
/// children are matched by local name and the namespace is ignored.
#[derive(Clone)]
pub struct Normalizer;

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    pub fn normalize(&self, body: &str) -> Result<Vec<Entry>> {
        let doc = Document::parse(body).map_err(|e| HotentryError::FeedParse(e.to_string()))?;

        doc.descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "item")
            .map(|item| Self::entry_from_item(&item))
            .collect()
    }

    fn entry_from_item(item: &Node<'_, '_>) -> Result<Entry> {
        let title = child_text(item, "title").unwrap_or_default();
        let link = child_text(item, "link").unwrap_or_default();

        let bookmark_count = match child_text(item, "bookmarkcount") {
            Some(raw) if !raw.is_empty() => raw.parse::<u32>().map_err(|_| {
                HotentryError::FeedParse(format!("invalid bookmarkcount {:?} for {}", raw, link))
            })?,
            _ => 0,
        };

        let mut entry = Entry::new(title, link, bookmark_count);
        entry.description = child_text(item, "description").unwrap_or_default();
        entry.date = child_text(item, "date")
            .or_else(|| child_text(item, "pubDate"))
            .unwrap_or_default();
        entry.image_url = child_text(item, "imageurl").filter(|u| !u.is_empty());

        Ok(entry)
    }
}

fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
        .map(|c| {
            let text: String = c
                .descendants()
                .filter(|d| d.is_text())
                .filter_map(|d| d.text())
                .collect();
            decode_html_entities(text.trim()).to_string()
        })
}
