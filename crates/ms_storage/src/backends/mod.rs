pub mod csv;

pub use csv::{CsvStore, LoadMode};
