use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use ms_search::{rank, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub claps: u64,
    pub similarity_score: f64,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_articles: usize,
    pub results_count: usize,
    pub results: Vec<SearchResult>,
}

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "article search service is running",
        "endpoints": {
            "/search": "POST body {\"query\": ...} or GET ?q=... - rank articles by keyword overlap",
            "/articles": "GET - total number of loaded articles",
        }
    }))
}

pub async fn search_post(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&state, &request.query).map(Json)
}

pub async fn search_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&state, &params.q).map(Json)
}

pub async fn count(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "total_articles": state.articles.len(),
        "corpus_file": state.corpus_file,
    }))
}

/// Shared by both search forms: trims, rejects blank queries, ranks the
/// snapshot, shapes the response.
pub(crate) fn run_search(state: &AppState, query: &str) -> Result<SearchResponse, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::invalid_query("query must not be empty"));
    }

    let ranked = rank(query, &state.articles, DEFAULT_TOP_K);
    debug!("query {:?} matched {} articles", query, ranked.len());

    let results: Vec<SearchResult> = ranked
        .iter()
        .map(|entry| SearchResult {
            url: entry.article.url.clone(),
            title: entry.article.title.clone(),
            claps: entry.article.claps,
            similarity_score: round2(entry.score),
        })
        .collect();

    Ok(SearchResponse {
        query: query.to_string(),
        total_articles: state.articles.len(),
        results_count: results.len(),
        results,
    })
}

fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::Article;

    fn state_with(texts_and_claps: &[(&str, u64)]) -> AppState {
        let articles = texts_and_claps
            .iter()
            .enumerate()
            .map(|(i, (text, claps))| Article {
                url: format!("https://medium.com/{i}"),
                title: format!("article {i}"),
                text: text.to_string(),
                claps: *claps,
                ..Article::default()
            })
            .collect();
        AppState::new(articles, "corpus.csv")
    }

    #[test]
    fn test_blank_query_rejected() {
        let state = state_with(&[("rust", 0)]);
        assert!(run_search(&state, "").is_err());
        assert!(run_search(&state, "   \t").is_err());
    }

    #[test]
    fn test_total_articles_is_corpus_size_not_match_count() {
        let state = state_with(&[("rust", 0), ("gardening", 0), ("cooking", 0)]);
        let response = run_search(&state, "rust").unwrap();
        assert_eq!(response.total_articles, 3);
        assert_eq!(response.results_count, 1);
    }

    #[test]
    fn test_claps_tiebreak_in_response() {
        let state = state_with(&[("machine learning basics", 10), ("deep learning guide", 50)]);
        let response = run_search(&state, "learning").unwrap();
        assert_eq!(response.results_count, 2);
        assert_eq!(response.results[0].claps, 50);
        assert_eq!(response.results[0].similarity_score, 1.0);
        assert_eq!(response.results[1].claps, 10);
    }

    #[test]
    fn test_empty_corpus() {
        let state = state_with(&[]);
        let response = run_search(&state, "anything").unwrap();
        assert_eq!(response.total_articles, 0);
        assert_eq!(response.results_count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_no_overlap_is_empty_success() {
        let state = state_with(&[("gardening tips", 5)]);
        let response = run_search(&state, "python").unwrap();
        assert_eq!(response.results_count, 0);
    }

    #[test]
    fn test_score_rounded_to_two_decimals() {
        // 1 of 3 query tokens present -> 0.333... -> 0.33
        let state = state_with(&[("rust", 0)]);
        let response = run_search(&state, "rust async tokio").unwrap();
        assert_eq!(response.results[0].similarity_score, 0.33);
    }

    #[test]
    fn test_results_capped_at_top_k() {
        let texts: Vec<(String, u64)> = (0..15).map(|i| ("rust".to_string(), i)).collect();
        let borrowed: Vec<(&str, u64)> =
            texts.iter().map(|(t, c)| (t.as_str(), *c)).collect();
        let state = state_with(&borrowed);
        let response = run_search(&state, "rust").unwrap();
        assert_eq!(response.results_count, 10);
        assert_eq!(response.total_articles, 15);
    }

    #[test]
    fn test_search_is_idempotent() {
        let state = state_with(&[("machine learning", 10), ("deep learning", 20)]);
        let first = serde_json::to_value(run_search(&state, "learning").unwrap()).unwrap();
        let second = serde_json::to_value(run_search(&state, "learning").unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
