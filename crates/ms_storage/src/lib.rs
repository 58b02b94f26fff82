pub mod backends;
pub mod failure_log;

pub use backends::csv::{CsvStore, LoadMode};
pub use failure_log::FailureLog;

pub mod prelude {
    pub use crate::backends::csv::{CsvStore, LoadMode};
    pub use crate::failure_log::FailureLog;
    pub use ms_core::storage::{ArticleSink, FailureSink};
}
