use crate::types::Article;
use crate::Result;
use async_trait::async_trait;

/// Write side of the corpus store. Appends are durable immediately so a
/// crawl aborted mid-run keeps everything already written.
#[async_trait]
pub trait ArticleSink: Send + Sync {
    async fn append(&self, article: &Article) -> Result<()>;
}

/// Failure side of a crawl run, kept separate from the success sink so a
/// failed URL never pollutes the corpus.
#[async_trait]
pub trait FailureSink: Send + Sync {
    async fn record(&self, url: &str, cause: &str) -> Result<()>;
}
