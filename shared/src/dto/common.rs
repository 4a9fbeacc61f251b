use serde::{Deserialize, Serialize};

/// Error body returned by the API on any non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, shown to the user as-is
    pub error: String,
}
