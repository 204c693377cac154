use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: String, id: u64 },

    #[error("Unexpected response from {url}: HTTP {status}")]
    UnexpectedResponse { url: String, status: u16 },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl StoreError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            StoreError::ApiError(_) | StoreError::UnexpectedResponse { .. } => {
                "The product service is unavailable right now".to_string()
            }
            StoreError::NotFound { resource, id } => format!("{} {} does not exist", resource, id),
            StoreError::IoError(_) => "Could not access local storage".to_string(),
            StoreError::SerializationError(_) => "Received data in an unexpected format".to_string(),
            StoreError::ConfigValidationError { field, message } => {
                format!("Invalid configuration ({}): {}", field, message)
            }
            StoreError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration ({}): {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StoreError::ApiError(_) | StoreError::UnexpectedResponse { .. } => {
                "Check that the API server is running and --api-endpoint points to it"
            }
            StoreError::NotFound { .. } => "List the catalog with `storefront products`",
            StoreError::IoError(_) => "Check permissions on --storage-path",
            StoreError::SerializationError(_) => "Check the API server version",
            _ => "Fix the configuration file or command-line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
