use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("mention source failed: {0}")]
    Source(String),
}
