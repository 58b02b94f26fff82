use async_trait::async_trait;
use ms_core::storage::FailureSink;
use ms_core::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of URLs that failed extraction, one `url<TAB>cause`
/// line each. Tabs keep the line splittable even when the cause contains
/// commas or quotes.
pub struct FailureLog {
    path: PathBuf,
}

impl FailureLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record_line(&self, url: &str, cause: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        // Keep the line one line: causes can carry newlines from upstream errors.
        let cause = cause.replace('\n', " ");
        writeln!(file, "{url}\t{cause}")?;
        Ok(())
    }
}

#[async_trait]
impl FailureSink for FailureLog {
    async fn record(&self, url: &str, cause: &str) -> Result<()> {
        self.record_line(url, cause)
    }
}
