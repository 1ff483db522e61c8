pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use test::adapter::{ParsedResults, ResultSummary, TestAdapter, TestRecord};
pub use test::{Framework, TestParser};
