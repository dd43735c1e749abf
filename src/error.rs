use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum DataflowError {
    #[error("missing configuration: {0}")]
    Configuration(String),
    #[error("invalid input: {0}")]
    Input(String),
    #[error("upstream returned {status}: {message}")]
    Transport { status: StatusCode, message: String },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("no usable text in response: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, DataflowError>;
