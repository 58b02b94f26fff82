use ms_core::storage::{ArticleSink, FailureSink};
use ms_core::Result;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use crate::extract::ArticleExtractor;

pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Per-URL result of one crawl iteration.
#[derive(Debug)]
pub enum CrawlOutcome {
    Stored { url: String },
    Failed { url: String, cause: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl CrawlSummary {
    fn absorb(&mut self, outcome: &CrawlOutcome) {
        self.attempted += 1;
        match outcome {
            CrawlOutcome::Stored { .. } => self.succeeded += 1,
            CrawlOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Sequential fetch-parse-append loop. One extraction in flight at a time,
/// with a fixed pause between fetches; extraction failures are logged and
/// skipped, never fatal. Sink failures are fatal: losing the corpus file
/// mid-run is not something to crawl through.
pub struct CrawlDriver {
    delay: Duration,
}

impl CrawlDriver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn run(
        &self,
        urls: &[String],
        extractor: &dyn ArticleExtractor,
        sink: &dyn ArticleSink,
        failures: &dyn FailureSink,
    ) -> Result<CrawlSummary> {
        let mut summary = CrawlSummary::default();

        for (index, url) in urls.iter().enumerate() {
            if index > 0 {
                sleep(self.delay).await;
            }
            let outcome = self.crawl_one(url, extractor, sink, failures).await?;
            summary.absorb(&outcome);
        }

        info!(
            "crawl finished: {} attempted, {} succeeded, {} failed",
            summary.attempted, summary.succeeded, summary.failed
        );
        Ok(summary)
    }

    async fn crawl_one(
        &self,
        url: &str,
        extractor: &dyn ArticleExtractor,
        sink: &dyn ArticleSink,
        failures: &dyn FailureSink,
    ) -> Result<CrawlOutcome> {
        match extractor.extract(url).await {
            Ok(article) => {
                // Append immediately so partial progress survives an abort.
                sink.append(&article).await?;
                info!("📄 stored {} ({} claps)", url, article.claps);
                Ok(CrawlOutcome::Stored {
                    url: url.to_string(),
                })
            }
            Err(e) => {
                let cause = e.to_string();
                failures.record(url, &cause).await?;
                warn!("failed to scrape {}: {}", url, cause);
                Ok(CrawlOutcome::Failed {
                    url: url.to_string(),
                    cause,
                })
            }
        }
    }
}

impl Default for CrawlDriver {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
