use async_trait::async_trait;
use csv::{ReaderBuilder, WriterBuilder};
use ms_core::storage::ArticleSink;
use ms_core::{Article, Error, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::warn;

/// What to do with a row that fails to parse at load time. Lenient keeps
/// the service available when a single row is damaged, matching the
/// crawler's own continue-on-error behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    #[default]
    Lenient,
    Strict,
}

/// The corpus store: a flat CSV file, one article per row, header row
/// first. The crawler appends; the query service reads it wholesale.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Appends one record, writing the header only when the file is new
    /// or empty. Flushes before returning so a killed crawl keeps every
    /// record appended so far.
    pub fn append_record(&self, article: &Article) -> Result<()> {
        let needs_header = std::fs::metadata(&self.path)
            .map(|meta| meta.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer.serialize(article)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads the whole corpus into memory. Duplicate URLs are kept as-is;
    /// re-crawled articles simply appear twice.
    pub fn load_all(&self, mode: LoadMode) -> Result<Vec<Article>> {
        if !self.path.exists() {
            return Err(Error::CorpusUnavailable(format!(
                "corpus file not found: {}",
                self.path.display()
            )));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let mut articles = Vec::new();
        for (row, record) in reader.deserialize::<Article>().enumerate() {
            match record {
                Ok(article) => articles.push(article),
                Err(e) => match mode {
                    LoadMode::Lenient => {
                        warn!("skipping malformed corpus row {}: {}", row + 2, e);
                    }
                    LoadMode::Strict => return Err(e.into()),
                },
            }
        }
        Ok(articles)
    }
}

#[async_trait]
impl ArticleSink for CsvStore {
    async fn append(&self, article: &Article) -> Result<()> {
        self.append_record(article)
    }
}
