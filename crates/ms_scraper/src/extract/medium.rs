use async_trait::async_trait;
use ms_core::{Article, Error, Result};
use scraper::Html;
use url::Url;

use super::utils;
use super::ArticleExtractor;

/// Extracts the article schema from a Medium story page. Stateless: every
/// call is one fetch plus a parse of the returned DOM.
pub struct MediumScraper {
    client: reqwest::Client,
}

impl MediumScraper {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Parses a fetched page into an Article. Split from the fetch so the
    /// field extraction is testable against canned HTML.
    pub fn parse_article(url: &str, html: &str) -> Result<Article> {
        let document = Html::parse_document(html);

        let paragraphs = {
            let scoped = utils::select_texts(&document, "article p");
            if scoped.is_empty() {
                utils::select_texts(&document, "p")
            } else {
                scoped
            }
        };
        if paragraphs.is_empty() {
            return Err(Error::extraction(url, "page has no body text"));
        }
        let text = paragraphs.join("\n\n");

        let title = utils::select_first_text(&document, "h1").unwrap_or_default();
        let subtitle = utils::select_first_text(&document, "article h2")
            .or_else(|| utils::select_first_text(&document, "h2"))
            .unwrap_or_default();

        let mut image_urls = utils::select_attrs(&document, "article img", "src");
        if image_urls.is_empty() {
            image_urls = utils::select_attrs(&document, "img", "src");
        }

        let mut hrefs = utils::select_attrs(&document, "article a", "href");
        if hrefs.is_empty() {
            hrefs = utils::select_attrs(&document, "a", "href");
        }
        let own_host = Url::parse(url).ok().and_then(|u| u.host_str().map(str::to_string));
        let external_link_count = hrefs
            .iter()
            .filter(|href| is_external(href, own_host.as_deref()))
            .count() as u32;

        let author_name = utils::select_first_attr(&document, r#"meta[name="author"]"#, "content")
            .unwrap_or_default();
        let author_url = utils::select_first_attr(&document, r#"link[rel="author"]"#, "href")
            .or_else(|| {
                utils::select_first_attr(&document, r#"meta[property="article:author"]"#, "content")
            })
            .unwrap_or_default();

        let claps = utils::select_first_text(&document, ".pw-multi-vote-count")
            .or_else(|| utils::select_first_text(&document, r#"[data-testid="headerClapButton"]"#))
            .map(|raw| parse_count(&raw))
            .unwrap_or(0);

        let reading_time =
            utils::select_first_attr(&document, r#"meta[name="twitter:data1"]"#, "content")
                .or_else(|| utils::select_first_text(&document, ".pw-reading-time"))
                .map(|raw| parse_reading_time(&raw))
                .unwrap_or(0.0);

        let keywords = utils::select_first_attr(&document, r#"meta[name="keywords"]"#, "content")
            .map(|raw| {
                raw.split(',')
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .collect()
            })
            .unwrap_or_else(|| utils::select_texts(&document, r#"a[href*="/tag/"]"#));

        Ok(Article {
            url: url.to_string(),
            title,
            subtitle,
            text,
            image_count: image_urls.len() as u32,
            image_urls,
            external_link_count,
            author_name,
            author_url,
            claps,
            reading_time,
            keywords,
        })
    }
}

impl Default for MediumScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleExtractor for MediumScraper {
    async fn extract(&self, url: &str) -> Result<Article> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::extraction(url, e.to_string()))?;
        let html = response
            .text()
            .await
            .map_err(|e| Error::extraction(url, e.to_string()))?;
        Self::parse_article(url, &html)
    }
}

fn is_external(href: &str, own_host: Option<&str>) -> bool {
    if !href.starts_with("http://") && !href.starts_with("https://") {
        return false;
    }
    match (Url::parse(href).ok().and_then(|u| u.host_str().map(str::to_string)), own_host) {
        (Some(link_host), Some(own)) => link_host != own,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Parses Medium's abbreviated counters: "1.2K" -> 1200, "3M" -> 3000000,
/// "1,024" -> 1024. Anything unparseable is 0.
fn parse_count(raw: &str) -> u64 {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return 0;
    }
    let (digits, multiplier) = match cleaned.chars().last() {
        Some('k') | Some('K') => (&cleaned[..cleaned.len() - 1], 1_000.0),
        Some('m') | Some('M') => (&cleaned[..cleaned.len() - 1], 1_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };
    digits
        .parse::<f64>()
        .map(|n| (n * multiplier).round() as u64)
        .unwrap_or(0)
}

/// Parses "6 min read" style markers into minutes.
fn parse_reading_time(raw: &str) -> f64 {
    raw.split_whitespace()
        .next()
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta name="author" content="Ada Writer">
  <meta property="article:author" content="https://medium.com/@ada">
  <meta name="twitter:data1" content="6 min read">
  <meta name="keywords" content="rust, search engines ,">
</head>
<body>
  <article>
    <h1>Building Search Engines</h1>
    <h2>A practical walkthrough</h2>
    <p>Search engines rank documents by relevance.</p>
    <p>Lexical overlap is the simplest signal.</p>
    <img src="https://cdn.example/diagram.png">
    <img src="https://cdn.example/chart.png">
    <a href="https://medium.com/other-story">internal</a>
    <a href="https://en.wikipedia.org/wiki/Search_engine">external</a>
    <a href="/relative/path">relative</a>
    <span class="pw-multi-vote-count">1.2K</span>
  </article>
</body>
</html>"#;

    #[test]
    fn test_parse_full_page() {
        let article =
            MediumScraper::parse_article("https://medium.com/@ada/search", FULL_PAGE).unwrap();
        assert_eq!(article.url, "https://medium.com/@ada/search");
        assert_eq!(article.title, "Building Search Engines");
        assert_eq!(article.subtitle, "A practical walkthrough");
        assert!(article.text.contains("rank documents"));
        assert!(article.text.contains("Lexical overlap"));
        assert_eq!(article.image_count, 2);
        assert_eq!(
            article.image_urls,
            vec![
                "https://cdn.example/diagram.png",
                "https://cdn.example/chart.png"
            ]
        );
        assert_eq!(article.external_link_count, 1);
        assert_eq!(article.author_name, "Ada Writer");
        assert_eq!(article.author_url, "https://medium.com/@ada");
        assert_eq!(article.claps, 1200);
        assert_eq!(article.reading_time, 6.0);
        assert_eq!(article.keywords, vec!["rust", "search engines"]);
    }

    #[test]
    fn test_minimal_page_yields_zero_values() {
        let article = MediumScraper::parse_article(
            "https://medium.com/x",
            "<html><body><p>just a paragraph</p></body></html>",
        )
        .unwrap();
        assert_eq!(article.text, "just a paragraph");
        assert!(article.title.is_empty());
        assert!(article.subtitle.is_empty());
        assert_eq!(article.image_count, 0);
        assert_eq!(article.external_link_count, 0);
        assert_eq!(article.claps, 0);
        assert_eq!(article.reading_time, 0.0);
        assert!(article.keywords.is_empty());
    }

    #[test]
    fn test_page_without_body_text_fails() {
        let result = MediumScraper::parse_article(
            "https://medium.com/x",
            "<html><body><h1>Title only</h1></body></html>",
        );
        assert!(matches!(result, Err(Error::Extraction { .. })));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("450"), 450);
        assert_eq!(parse_count("1,024"), 1024);
        assert_eq!(parse_count("1.2K"), 1200);
        assert_eq!(parse_count("3M"), 3_000_000);
        assert_eq!(parse_count("2.5m"), 2_500_000);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("claps"), 0);
    }

    #[test]
    fn test_parse_reading_time() {
        assert_eq!(parse_reading_time("6 min read"), 6.0);
        assert_eq!(parse_reading_time("4.5 min read"), 4.5);
        assert_eq!(parse_reading_time("about a minute"), 0.0);
    }

    #[test]
    fn test_same_host_links_are_internal() {
        assert!(!is_external(
            "https://medium.com/story",
            Some("medium.com")
        ));
        assert!(is_external("https://example.org", Some("medium.com")));
        assert!(!is_external("/relative", Some("medium.com")));
        assert!(!is_external("mailto:a@b.c", Some("medium.com")));
    }
}
