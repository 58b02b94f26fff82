use serde::{Deserialize, Serialize};

/// One scraped article. Field order is the corpus CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub image_count: u32,
    #[serde(default, with = "pipe_list")]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub external_link_count: u32,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default)]
    pub claps: u64,
    #[serde(default)]
    pub reading_time: f64,
    #[serde(default, with = "pipe_list")]
    pub keywords: Vec<String>,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            url: String::new(),
            title: String::new(),
            subtitle: String::new(),
            text: String::new(),
            image_count: 0,
            image_urls: Vec::new(),
            external_link_count: 0,
            author_name: String::new(),
            author_url: String::new(),
            claps: 0,
            reading_time: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// List-valued fields occupy a single CSV column, pipe-joined.
/// An empty column round-trips to an empty list.
pub mod pipe_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const SEPARATOR: char = '|';

    pub fn serialize<S: Serializer>(items: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&items.join(&SEPARATOR.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let joined = String::deserialize(deserializer)?;
        if joined.is_empty() {
            return Ok(Vec::new());
        }
        Ok(joined.split(SEPARATOR).map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_article_has_zero_values() {
        let article = Article::default();
        assert!(article.url.is_empty());
        assert_eq!(article.claps, 0);
        assert!(article.image_urls.is_empty());
        assert_eq!(article.reading_time, 0.0);
    }
}
