use async_trait::async_trait;
use ms_core::{Article, Result};

pub mod medium;

/// One outbound fetch per call; pacing between calls is the driver's job.
#[async_trait]
pub trait ArticleExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<Article>;
}

/// Shared selector helpers. Selectors here are static strings; an invalid
/// one simply selects nothing.
pub(crate) mod utils {
    use scraper::{Html, Selector};

    pub fn select_first_text(document: &Html, selector: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
    }

    pub fn select_texts(document: &Html, selector: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        document
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }

    pub fn select_attrs(document: &Html, selector: &str, attr: &str) -> Vec<String> {
        let Ok(selector) = Selector::parse(selector) else {
            return Vec::new();
        };
        document
            .select(&selector)
            .filter_map(|el| el.value().attr(attr))
            .map(str::to_string)
            .collect()
    }

    pub fn select_first_attr(document: &Html, selector: &str, attr: &str) -> Option<String> {
        select_attrs(document, selector, attr).into_iter().next()
    }
}
