use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Content parsing error: {message}")]
    ParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Duplicate value for '{field}': '{value}'")]
    DuplicateError { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parse,
    Validation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ContentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContentError::IoError(_) => ErrorCategory::Io,
            ContentError::SerializationError(_) | ContentError::ParseError { .. } => {
                ErrorCategory::Parse
            }
            ContentError::InvalidValueError { .. }
            | ContentError::DuplicateError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContentError::IoError(_) => ErrorSeverity::Critical,
            ContentError::SerializationError(_) => ErrorSeverity::Medium,
            ContentError::ParseError { .. }
            | ContentError::InvalidValueError { .. }
            | ContentError::DuplicateError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ContentError::IoError(_) => {
                "Check that the content file exists and is readable".to_string()
            }
            ContentError::SerializationError(_) => {
                "Retry with --format text to inspect the derived view".to_string()
            }
            ContentError::ParseError { .. } => {
                "Make sure the content file is valid TOML and every status, category and level uses a known value".to_string()
            }
            ContentError::InvalidValueError { field, .. } => {
                format!("Fix the value of '{}' in the content file", field)
            }
            ContentError::DuplicateError { field, value } => {
                format!("Rename one of the entries sharing {} '{}'", field, value)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read content: {}", self),
            ErrorCategory::Parse => format!("Content could not be parsed: {}", self),
            ErrorCategory::Validation => format!("Content is invalid: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;
