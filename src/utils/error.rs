use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Catalog validation error: {message}")]
    ValidationError { message: String },

    #[error("Tailor not found: {id}")]
    NotFoundError { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code; only `Low` (a warning) counts as success.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FinderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::IoError(_) => ErrorCategory::Io,
            FinderError::SerializationError(_)
            | FinderError::CsvError(_)
            | FinderError::ValidationError { .. } => ErrorCategory::Data,
            FinderError::ConfigError { .. }
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FinderError::NotFoundError { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FinderError::IoError(_) => ErrorSeverity::Medium,
            FinderError::NotFoundError { .. }
            | FinderError::SerializationError(_)
            | FinderError::CsvError(_)
            | FinderError::ValidationError { .. } => ErrorSeverity::High,
            FinderError::ConfigError { .. }
            | FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FinderError::IoError(_) => {
                "Check that the catalog file exists and the output directory is writable".to_string()
            }
            FinderError::SerializationError(_) => {
                "Make sure the catalog file is a JSON array of tailor records".to_string()
            }
            FinderError::CsvError(_) => "Retry with a different output format".to_string(),
            FinderError::ConfigError { .. } | FinderError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            FinderError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            FinderError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            FinderError::ValidationError { .. } => {
                "Fix the offending catalog record (ids must be unique, ratings 0-5, distances numeric)"
                    .to_string()
            }
            FinderError::NotFoundError { .. } => {
                "Run without --id to list the available tailors".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::IoError(e) => format!("Could not read or write a file: {}", e),
            FinderError::SerializationError(e) => format!("The catalog could not be parsed: {}", e),
            FinderError::CsvError(e) => format!("CSV output failed: {}", e),
            FinderError::NotFoundError { id } => format!("No tailor with id '{}'", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
