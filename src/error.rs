use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported framework: {0}")]
    UnsupportedFramework(String),

    #[error("MISSING_CAPTURE: pattern '{pattern}' matched without its expected group on line: {line}")]
    MissingCapture { pattern: String, line: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
