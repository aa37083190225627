use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingField { .. } | ApiError::InvalidEmail { .. } => 400,
            ApiError::MethodNotAllowed { .. } => 405,
            _ => 500,
        }
    }

    /// Message exposed to the caller. Internal detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::MissingField { .. } => "All fields are required",
            ApiError::InvalidEmail { .. } => "Invalid email address",
            ApiError::MethodNotAllowed { .. } => "Method not allowed",
            _ => "Internal server error",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
