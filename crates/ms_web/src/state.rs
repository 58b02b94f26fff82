use ms_core::Article;

/// The corpus snapshot handed to every handler. Loaded once before the
/// server starts and never mutated, so concurrent requests share it
/// through an `Arc` with no locking.
pub struct AppState {
    pub articles: Vec<Article>,
    pub corpus_file: String,
}

impl AppState {
    pub fn new(articles: Vec<Article>, corpus_file: impl Into<String>) -> Self {
        Self {
            articles,
            corpus_file: corpus_file.into(),
        }
    }
}
