pub mod error;
pub mod storage;
pub mod types;

pub use error::Error;
pub use types::Article;

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::storage::ArticleSink;
    pub use crate::types::Article;
    pub use crate::{Error, Result};
}
