use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameError {
    #[error("Failed to compile {name} pattern `{literal}`: {source}")]
    PatternCompilationError {
        name: &'static str,
        literal: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value `{value}` for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NameError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            NameError::PatternCompilationError { .. } => ErrorSeverity::Critical,
            NameError::IoError(_) | NameError::SerializationError(_) => ErrorSeverity::Medium,
            NameError::ConfigError { .. }
            | NameError::InvalidConfigValueError { .. }
            | NameError::ValidationError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NameError::PatternCompilationError { name, .. } => {
                format!("The built-in {} name pattern is malformed; cannot start", name)
            }
            NameError::IoError(e) => format!("Could not read input: {}", e),
            NameError::SerializationError(e) => format!("Could not render output: {}", e),
            NameError::ConfigError { message } => format!("Configuration problem: {}", message),
            NameError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            NameError::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compilation_error_is_critical() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = NameError::PatternCompilationError {
            name: "first-last",
            literal: "(".to_string(),
            source,
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("first-last"));
        assert!(err.to_string().contains("`(`"));
    }

    #[test]
    fn test_config_errors_exit_with_one() {
        let err = NameError::InvalidConfigValueError {
            field: "output.format".to_string(),
            value: "xml".to_string(),
            reason: "unsupported".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("output.format"));
    }
}
