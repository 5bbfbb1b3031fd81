use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unresolved import symbol '{symbol}' under '{path}'")]
    UnresolvedImportError { path: String, symbol: String },

    #[error("Import hook '{name}' failed: {message}")]
    HookError { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SettingsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SettingsError::IoError(_) => ErrorSeverity::Critical,
            SettingsError::SerializationError(_)
            | SettingsError::ConfigValidationError { .. }
            | SettingsError::MissingConfigError { .. }
            | SettingsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SettingsError::UnresolvedImportError { .. } | SettingsError::HookError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SettingsError::IoError(_) => {
                "Check that the settings file exists and is readable".to_string()
            }
            SettingsError::SerializationError(_) => {
                "Check the JSON syntax of the settings document".to_string()
            }
            SettingsError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the settings document", field)
            }
            SettingsError::MissingConfigError { field } => {
                format!("Add the required '{}' field to the settings document", field)
            }
            SettingsError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the settings document", field)
            }
            SettingsError::UnresolvedImportError { symbol, .. } => {
                format!("Register '{}' in the hook registry before resolving", symbol)
            }
            SettingsError::HookError { name, .. } => {
                format!("Inspect the log output of the '{}' hook", name)
            }
        }
    }
}
