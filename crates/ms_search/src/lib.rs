pub mod ranker;
pub mod tokenizer;

pub use ranker::{rank, RankedArticle, DEFAULT_TOP_K};
pub use tokenizer::tokenize;

pub mod prelude {
    pub use crate::ranker::{rank, RankedArticle};
    pub use crate::tokenizer::tokenize;
    pub use ms_core::{Article, Result};
}
