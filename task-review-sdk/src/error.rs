use serde_json::Value;

/// Fallback message when a failed response carries no usable `error` field
pub const API_ERROR_FALLBACK: &str = "API Error";

/// Everything that can stop a single analyze or suggest action.
///
/// `Display` is the exact text shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("Paste tasks JSON into the textarea.")]
    EmptyInput,

    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("JSON must be an array of tasks.")]
    Shape,

    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        details: Option<Value>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("No suggestions returned")]
    EmptyResult,
}

impl ReviewError {
    /// Input errors are raised before any request is sent
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ReviewError::EmptyInput | ReviewError::Parse(_) | ReviewError::Shape
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ReviewError::EmptyInput => "empty_input",
            ReviewError::Parse(_) => "parse",
            ReviewError::Shape => "shape",
            ReviewError::Api { .. } => "api",
            ReviewError::Network(_) => "network",
            ReviewError::EmptyResult => "empty_result",
        }
    }
}

impl From<reqwest::Error> for ReviewError {
    fn from(err: reqwest::Error) -> Self {
        ReviewError::Network(err.to_string())
    }
}
