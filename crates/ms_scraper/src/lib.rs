pub mod driver;
pub mod extract;

pub use driver::{CrawlDriver, CrawlOutcome, CrawlSummary};
pub use extract::medium::MediumScraper;
pub use extract::ArticleExtractor;

pub mod prelude {
    pub use crate::driver::{CrawlDriver, CrawlSummary};
    pub use crate::extract::medium::MediumScraper;
    pub use crate::extract::ArticleExtractor;
    pub use ms_core::{Article, Error, Result};
}
