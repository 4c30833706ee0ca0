use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("inference request failed: {0}")]
    Request(#[from] ureq::Error),

    #[error("inference endpoint returned an error: {0}")]
    Remote(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
