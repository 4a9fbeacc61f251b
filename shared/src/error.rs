use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    /// Message comes straight from the update endpoint and is shown verbatim
    #[error("{0}")]
    UpdateFailed(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
