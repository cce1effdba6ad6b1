use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatsortError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error (line {line}): {message}")]
    Parse { line: u64, message: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Index {index} out of range for permutation of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("Thread Pool Error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type HsResult<T> = Result<T, HeatsortError>;
