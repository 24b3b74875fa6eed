use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Internal(String),
    ValidationError(String),
    InvalidLLMResponse(String),
    ParseError { message: String, raw_output: String },
    LLMError(String),
    DatabaseError(String),
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "{}", msg),
            AppError::InvalidLLMResponse(msg) => write!(f, "{}", msg),
            AppError::ParseError { message, .. } => write!(f, "AI output parse error: {}", message),
            AppError::LLMError(msg) => write!(f, "{}", msg),
            AppError::DatabaseError(msg) => write!(f, "{}", msg),
            AppError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// True for failures caused by the caller rather than by this service or its upstreams.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::ValidationError(_))
    }

    /// Raw model output attached to extraction failures.
    pub fn ai_output(&self) -> Option<&str> {
        match self {
            AppError::ParseError { raw_output, .. } => Some(raw_output),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
