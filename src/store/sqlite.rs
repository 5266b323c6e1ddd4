use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{params, Connection};
use rusqlite_migration::{Migrations, M};

use crate::app::{HotentryError, Result};
use crate::store::Store;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<()> {
        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../migrations/001-initial/up.sql"
        ))]);

        let mut conn = self.lock()?;
        migrations
            .to_latest(&mut conn)
            .map_err(|_| HotentryError::Database(rusqlite::Error::InvalidQuery))?;

        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|e| {
            HotentryError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(e.to_string()),
            ))
        })
    }

    fn select_all(&self, sql: &str) -> Result<BTreeSet<String>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql)?;
        let values = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<BTreeSet<_>, _>>()?;
        Ok(values)
    }

    fn insert_value(&self, sql: &str, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }

        let conn = self.lock()?;
        let inserted = conn.execute(sql, params![value])?;
        Ok(inserted > 0)
    }
}

impl Store for SqliteStore {
    fn list_domains(&self) -> Result<BTreeSet<String>> {
        self.select_all("SELECT domain FROM BlockDomains")
    }

    fn list_words(&self) -> Result<BTreeSet<String>> {
        self.select_all("SELECT word FROM BlockWords")
    }

    fn add_domain(&self, domain: &str) -> Result<bool> {
        let inserted =
            self.insert_value("INSERT OR IGNORE INTO BlockDomains (domain) VALUES (?1)", domain)?;
        if inserted {
            tracing::info!(domain = domain.trim(), "blocked domain registered");
        }
        Ok(inserted)
    }

    fn add_word(&self, word: &str) -> Result<bool> {
        let inserted =
            self.insert_value("INSERT OR IGNORE INTO BlockWords (word) VALUES (?1)", word)?;
        if inserted {
            tracing::info!(word = word.trim(), "blocked word registered");
        }
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BlockList, Entry};

    #[test]
    fn test_add_and_list_domains() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.add_domain("togetter.com").unwrap());
        assert!(store.add_domain("gizmodo.jp").unwrap());

        let domains = store.list_domains().unwrap();
        assert_eq!(domains.len(), 2);
        assert!(domains.contains("togetter.com"));
        assert!(store.list_words().unwrap().is_empty());
    }

    #[test]
    fn test_add_is_idempotent() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.add_word("驚愕").unwrap());
        assert!(!store.add_word("驚愕").unwrap());
        assert_eq!(store.list_words().unwrap().len(), 1);

        assert!(store.add_domain("x.com").unwrap());
        assert!(!store.add_domain("x.com").unwrap());
        assert_eq!(store.list_domains().unwrap().len(), 1);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(!store.add_domain("").unwrap());
        assert!(!store.add_word("   ").unwrap());
        assert!(store.list_domains().unwrap().is_empty());
        assert!(store.list_words().unwrap().is_empty());
    }

    #[test]
    fn test_values_are_stored_trimmed() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.add_word(" 政治 ").unwrap());
        assert!(!store.add_word("政治").unwrap());
        assert!(store.add_domain("\tqiita.com\n").unwrap());

        assert!(store.list_words().unwrap().contains("政治"));
        assert!(store.list_domains().unwrap().contains("qiita.com"));
        assert_eq!(store.list_words().unwrap().len(), 1);
    }

    #[test]
    fn test_kinds_are_independent() {
        let store = SqliteStore::in_memory().unwrap();
        store.add_domain("same").unwrap();
        assert!(store.add_word("same").unwrap());
        assert_eq!(store.list_domains().unwrap().len(), 1);
        assert_eq!(store.list_words().unwrap().len(), 1);
    }

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hotentry.db");

        {
            let store = SqliteStore::new(&path).unwrap();
            store.add_domain("anond.hatelabo.jp").unwrap();
            store.add_word("政治").unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        assert!(store.list_domains().unwrap().contains("anond.hatelabo.jp"));
        assert!(store.list_words().unwrap().contains("政治"));
    }

    #[test]
    fn test_opens_database_with_existing_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE BlockDomains (domain TEXT PRIMARY KEY);
                 CREATE TABLE BlockWords (word TEXT PRIMARY KEY);
                 INSERT INTO BlockWords (word) VALUES ('残念');",
            )
            .unwrap();
        }

        let store = SqliteStore::new(&path).unwrap();
        assert!(store.list_words().unwrap().contains("残念"));
    }

    #[test]
    fn test_blocklist_merges_defaults() {
        let store = SqliteStore::in_memory().unwrap();
        store.add_word("驚愕").unwrap();
        let defaults = BlockList::from_parts(vec!["x.com".to_string()], vec![]);

        let list = store.blocklist(&defaults).unwrap();
        assert!(list.matches(&Entry::new("驚愕の事実", "http://ok.example/2", 10)));
        assert!(list.matches(&Entry::new("ok", "https://x.com/1", 1)));
        assert!(!list.matches(&Entry::new("短い", "http://ok.example/1", 5)));
    }

    #[test]
    fn test_concurrent_writers() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(SqliteStore::in_memory().unwrap());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                thread::spawn(move || {
                    store.add_domain(&format!("d{}.example", i % 4)).unwrap();
                    store.list_domains().unwrap();
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.list_domains().unwrap().len(), 4);
    }
}
