use std::collections::BTreeSet;

use crate::domain::Entry;

/// A substring pattern that suppresses matching entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockRule {
    /// Matched against the entry link.
    Domain(String),
    /// Matched against the entry title.
    Word(String),
}

impl BlockRule {
    pub fn pattern(&self) -> &str {
        match self {
            BlockRule::Domain(d) => d,
            BlockRule::Word(w) => w,
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        let pattern = self.pattern();
        if pattern.is_empty() {
            return false;
        }
        match self {
            BlockRule::Domain(_) => entry.link.contains(pattern),
            BlockRule::Word(_) => entry.title.contains(pattern),
        }
    }
}

/// Effective set of block rules for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    domains: BTreeSet<String>,
    words: BTreeSet<String>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts<D, W>(domains: D, words: W) -> Self
    where
        D: IntoIterator<Item = String>,
        W: IntoIterator<Item = String>,
    {
        let mut list = Self::new();
        for d in domains {
            list.insert(BlockRule::Domain(d));
        }
        for w in words {
            list.insert(BlockRule::Word(w));
        }
        list
    }

    /// Adds a rule. Empty patterns are ignored.
    pub fn insert(&mut self, rule: BlockRule) -> bool {
        match rule {
            BlockRule::Domain(d) if !d.is_empty() => self.domains.insert(d),
            BlockRule::Word(w) if !w.is_empty() => self.words.insert(w),
            _ => false,
        }
    }

    pub fn extend(&mut self, other: BlockList) {
        self.domains.extend(other.domains);
        self.words.extend(other.words);
    }

    pub fn domains(&self) -> &BTreeSet<String> {
        &self.domains
    }

    pub fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.words.is_empty()
    }

    pub fn blocks_link(&self, link: &str) -> bool {
        self.domains.iter().any(|d| link.contains(d.as_str()))
    }

    pub fn blocks_title(&self, title: &str) -> bool {
        self.words.iter().any(|w| title.contains(w.as_str()))
    }

    /// True when the entry link contains a blocked domain or its title a blocked word.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.blocks_link(&entry.link) || self.blocks_title(&entry.title)
    }

    pub fn rules(&self) -> impl Iterator<Item = BlockRule> + '_ {
        self.domains
            .iter()
            .cloned()
            .map(BlockRule::Domain)
            .chain(self.words.iter().cloned().map(BlockRule::Word))
    }
}
