use crate::tokenizer::tokenize;
use ms_core::Article;

pub const DEFAULT_TOP_K: usize = 10;

/// A corpus entry paired with its score for one query. Borrows the
/// article; the corpus snapshot outlives every ranking pass.
#[derive(Debug, Clone, Copy)]
pub struct RankedArticle<'a> {
    pub article: &'a Article,
    pub score: f64,
}

/// Scores every article against the query and returns the top `top_k`.
///
/// The score is the fraction of query tokens present in the article text,
/// so it lands in [0, 1] and is not symmetric. Zero-score articles are
/// dropped. Ordering is score descending, then claps descending; the sort
/// is stable, so remaining ties keep corpus order.
pub fn rank<'a>(query: &str, corpus: &'a [Article], top_k: usize) -> Vec<RankedArticle<'a>> {
    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<RankedArticle<'a>> = corpus
        .iter()
        .filter_map(|article| {
            let article_tokens = tokenize(&article.text);
            let overlap = query_tokens
                .iter()
                .filter(|token| article_tokens.contains(*token))
                .count();
            if overlap == 0 {
                return None;
            }
            Some(RankedArticle {
                article,
                score: overlap as f64 / query_tokens.len() as f64,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then(b.article.claps.cmp(&a.article.claps))
    });
    ranked.truncate(top_k);
    ranked
}
