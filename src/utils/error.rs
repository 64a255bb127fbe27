use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' failed to parse: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid date for '{field}': {reason}")]
    InvalidDateError { field: String, reason: String },

    #[error("Milestone table error: {message}")]
    MilestoneTableError { message: String },

    #[error("Account store error: {message}")]
    StoreError { message: String },

    #[error("Account '{username}' already exists")]
    DuplicateAccountError { username: String },

    #[error("E-mail '{email}' is already registered")]
    DuplicateEmailError { email: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Content,
    Storage,
    Account,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::IoError(_) | TrackerError::CsvError(_) => ErrorCategory::Storage,
            TrackerError::SerializationError(_) | TrackerError::StoreError { .. } => {
                ErrorCategory::Storage
            }
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TrackerError::InvalidDateError { .. } | TrackerError::ValidationError { .. } => {
                ErrorCategory::Input
            }
            TrackerError::MilestoneTableError { .. } => ErrorCategory::Content,
            TrackerError::DuplicateAccountError { .. }
            | TrackerError::DuplicateEmailError { .. } => ErrorCategory::Account,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::DuplicateAccountError { .. }
            | TrackerError::DuplicateEmailError { .. } => ErrorSeverity::Medium,
            TrackerError::InvalidDateError { .. } | TrackerError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            TrackerError::ConfigError { .. }
            | TrackerError::ConfigValidationError { .. }
            | TrackerError::InvalidConfigValueError { .. }
            | TrackerError::MilestoneTableError { .. } => ErrorSeverity::High,
            TrackerError::IoError(_)
            | TrackerError::CsvError(_)
            | TrackerError::SerializationError(_)
            | TrackerError::StoreError { .. } => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::IoError(e) => format!("Could not read or write a file: {}", e),
            TrackerError::SerializationError(_) => "Could not produce JSON output".to_string(),
            TrackerError::CsvError(_) => "Could not write the week schedule".to_string(),
            TrackerError::ConfigError { message } => format!("Configuration problem: {}", message),
            TrackerError::ConfigValidationError { field, .. } => {
                format!("The configuration file is not valid ({})", field)
            }
            TrackerError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            TrackerError::InvalidDateError { field, reason } => {
                format!("The {} is not usable: {}", field.replace('_', " "), reason)
            }
            TrackerError::MilestoneTableError { message } => {
                format!("Development content could not be loaded: {}", message)
            }
            TrackerError::StoreError { message } => format!("Account store failed: {}", message),
            TrackerError::DuplicateAccountError { username } => {
                format!("The username '{}' is already taken", username)
            }
            TrackerError::DuplicateEmailError { email } => {
                format!("An account already uses {}", email)
            }
            TrackerError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the TOML configuration file and command line flags"
            }
            ErrorCategory::Input => {
                "Check the highlighted field; dates are YYYY-MM-DD and must be realistic"
            }
            ErrorCategory::Content => {
                "Check the milestones file: weeks must be unique and between 1 and 42"
            }
            ErrorCategory::Storage => "Check the path exists and is writable",
            ErrorCategory::Account => "Choose a different username or e-mail address",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_errors_are_input_errors() {
        let err = TrackerError::InvalidDateError {
            field: "due_date".to_string(),
            reason: "Due date must be in the future.".to_string(),
        };

        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("due date"));
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err = TrackerError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.recovery_suggestion(), "Check the path exists and is writable");
    }

    #[test]
    fn test_duplicate_email_is_account_error() {
        let err = TrackerError::DuplicateEmailError {
            email: "amani@example.com".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Account);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("amani@example.com"));
    }
}
