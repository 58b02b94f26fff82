use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("extraction failed for {url}: {cause}")]
    Extraction { url: String, cause: String },

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    pub fn extraction(url: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::Extraction {
            url: url.into(),
            cause: cause.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
