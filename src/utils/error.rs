use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}: {message}")]
    StatusError { status: u16, message: String },

    #[error("Bad request / Cannot find contact {id}")]
    NotFound { id: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field '{field}'")]
    MissingConfigError { field: String },
}

impl ContactError {
    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound { id: id.to_string() }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigError { .. }
                | Self::ConfigValidationError { .. }
                | Self::InvalidConfigValueError { .. }
                | Self::MissingConfigError { .. }
                | Self::UrlError(_)
        )
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => "The contacts server did not answer in time".to_string(),
            Self::ApiError(e) if e.is_connect() => "Could not connect to the contacts server".to_string(),
            Self::ApiError(e) if e.is_decode() => "The contacts server sent an unreadable response".to_string(),
            Self::StatusError { status, .. } => format!("The contacts server rejected the request ({})", status),
            Self::NotFound { id } => format!("Contact {} could not be found", id),
            Self::InvalidConfigValueError { field, reason, .. } => format!("Invalid setting {}: {}", field, reason),
            Self::MissingConfigError { field } => format!("Missing setting {}", field),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ApiError(_) | Self::StatusError { .. } => {
                "Check that the backend is running and --base-url points at it"
            }
            Self::NotFound { .. } => "Run `list` or `refresh` to see the current contact ids",
            Self::IoError(_) => "Check file permissions and paths",
            Self::SerializationError(_) => "Check the backend response format",
            _ if self.is_config_error() => "Fix the command line flags or the TOML config file",
            _ => "Try the operation again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
