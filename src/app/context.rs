use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{HotentryError, Result};
use crate::config::Config;
use crate::domain::{BlockList, Entry};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::normalizer::Normalizer;
use crate::pipeline::{self, FormatOptions, Rendered};
use crate::store::{SqliteStore, Store};

pub struct AppContext {
    pub config: Arc<Config>,
    pub store: Arc<SqliteStore>,
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        config.feed_url()?;

        let db_path = match &config.store.path {
            Some(p) => p.clone(),
            None => Self::default_db_path()?,
        };
        tracing::debug!(path = %db_path.display(), "opening block list store");

        let store = Arc::new(SqliteStore::new(&db_path)?);
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new()?);

        Ok(Self::with_parts(config, store, fetcher))
    }

    pub fn with_parts(
        config: Config,
        store: Arc<SqliteStore>,
        fetcher: Arc<dyn Fetcher + Send + Sync>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            fetcher,
            normalizer: Normalizer::new(),
        }
    }

    pub fn in_memory(config: Config, fetcher: Arc<dyn Fetcher + Send + Sync>) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Ok(Self::with_parts(config, store, fetcher))
    }

    /// Fetch and parse the hot entry feed.
    pub async fn hot_entries(&self) -> Result<Vec<Entry>> {
        let body = self.fetcher.fetch(&self.config.feed.url).await?;
        let entries = self.normalizer.normalize(&body)?;
        tracing::info!(count = entries.len(), "hot entries parsed");
        Ok(entries)
    }

    /// Config defaults plus the rules registered in the store.
    pub fn blocklist(&self) -> Result<BlockList> {
        let defaults = BlockList::from_parts(
            self.config.blocklist.domains.iter().cloned(),
            self.config.blocklist.words.iter().cloned(),
        );
        self.store.blocklist(&defaults)
    }

    /// Run the whole fetch → parse → filter/format pipeline.
    pub async fn render(&self, opts: &FormatOptions) -> Result<Rendered> {
        let entries = self.hot_entries().await?;
        let blocklist = self.blocklist()?;
        Ok(pipeline::render(entries, &blocklist, opts))
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| HotentryError::Other("Could not find data directory".into()))?;
        let dir = data_dir.join("hotentry");
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join("hotentry.db"))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;

    use crate::app::{HotentryError, Result};
    use crate::fetcher::Fetcher;

    /// Serves a canned body, or fails like an unreachable host.
    pub struct StaticFetcher(pub Option<String>);

    impl StaticFetcher {
        pub fn body(body: &str) -> Self {
            Self(Some(body.to_string()))
        }

        pub fn failing() -> Self {
            Self(None)
        }
    }

    #[async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.0
                .clone()
                .ok_or_else(|| HotentryError::Other(format!("connection refused: {}", url)))
        }
    }

    pub fn rss(items: &[(&str, &str, u32)]) -> String {
        let body: String = items
            .iter()
            .map(|(title, link, count)| {
                format!(
                    "<item rdf:about=\"{link}\"><title>{title}</title><link>{link}</link>\
                     <description>about {title}</description>\
                     <dc:date>2024-03-05T08:09:10+09:00</dc:date>\
                     <hatena:bookmarkcount>{count}</hatena:bookmarkcount></item>"
                )
            })
            .collect();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <rdf:RDF xmlns=\"http://purl.org/rss/1.0/\" \
             xmlns:rdf=\"http://www.w3.org/1999/02/22-rdf-syntax-ns#\" \
             xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
             xmlns:hatena=\"http://www.hatena.ne.jp/info/xmlns#\">{body}</rdf:RDF>"
        )
    }
}
