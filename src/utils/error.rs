use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DdError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot open source file {path:?}: {source}")]
    SourceOpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot open destination file {path:?}: {source}")]
    DestinationOpenError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Seek to offset {offset} failed: {source}")]
    SeekError {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Transfer failed: {source}")]
    TransferError {
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required argument: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileAccess,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 使用者可以修正的錯誤
    High,
    /// 複製途中失敗，目的檔可能只寫了一部分
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl DdError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DdError::MissingConfigError { .. }
            | DdError::InvalidConfigValueError { .. }
            | DdError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            DdError::SourceOpenError { .. } | DdError::DestinationOpenError { .. } => {
                ErrorCategory::FileAccess
            }
            DdError::SeekError { .. } | DdError::TransferError { .. } | DdError::IoError(_) => {
                ErrorCategory::Transfer
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration | ErrorCategory::FileAccess => ErrorSeverity::High,
            ErrorCategory::Transfer => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DdError::MissingConfigError { field } => {
                format!("Please specify `{}` argument", field)
            }
            DdError::InvalidConfigValueError { field, reason, .. } => {
                format!("{} {}", capitalize(field), reason)
            }
            DdError::ConfigValidationError { message, .. } => message.clone(),
            DdError::SourceOpenError { path, source } => {
                format!("Cannot read {}: {}", path.display(), source)
            }
            DdError::DestinationOpenError { path, source } => {
                format!("Cannot write {}: {}", path.display(), source)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DdError::MissingConfigError { .. } => {
                "Pass both -from and -to, or provide them in the [copy] table of a -config file"
            }
            DdError::InvalidConfigValueError { .. } => {
                "Offset and limit must be non-negative integers; paths must be non-empty"
            }
            DdError::ConfigValidationError { .. } => "Check the TOML syntax of the config file",
            DdError::SourceOpenError { .. } => {
                "Make sure the source file exists and is readable"
            }
            DdError::DestinationOpenError { .. } => {
                "Make sure the destination directory exists and is writable"
            }
            DdError::SeekError { .. } => "The source may not support seeking; try offset 0",
            DdError::TransferError { .. } | DdError::IoError(_) => {
                "Check free disk space and device health, then run the copy again"
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DdError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_configuration_errors_exit_with_one() {
        let err = DdError::MissingConfigError {
            field: "from".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity().exit_code(), 1);
        assert_eq!(err.user_friendly_message(), "Please specify `from` argument");
    }

    #[test]
    fn test_transfer_errors_are_critical() {
        let err = DdError::TransferError {
            source: io::Error::new(io::ErrorKind::Other, "disk full"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = DdError::InvalidConfigValueError {
            field: "offset".to_string(),
            value: "-1".to_string(),
            reason: "should be not negative".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Offset should be not negative");
    }
}
