pub mod sqlite;

use std::collections::BTreeSet;

use crate::app::Result;
use crate::domain::BlockList;

pub use sqlite::SqliteStore;

pub trait Store {
    fn list_domains(&self) -> Result<BTreeSet<String>>;
    fn list_words(&self) -> Result<BTreeSet<String>>;

    /// Values are stored with surrounding whitespace trimmed, so `" 政治 "`
    /// and `"政治"` are the same rule.
    ///
    /// Returns `true` when a new row was written; blank and duplicate values are no-ops.
    fn add_domain(&self, domain: &str) -> Result<bool>;
    fn add_word(&self, word: &str) -> Result<bool>;

    /// Stored rules merged over `defaults`.
    fn blocklist(&self, defaults: &BlockList) -> Result<BlockList> {
        let mut list = defaults.clone();
        list.extend(BlockList::from_parts(self.list_domains()?, self.list_words()?));
        Ok(list)
    }
}
