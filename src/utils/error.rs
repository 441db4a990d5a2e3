use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Manual not found: {}", path.display())]
    ManualNotFound { path: PathBuf },

    #[error("Manual is not valid UTF-8: {}", path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Completion request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Completion API returned {status}: {message}")]
    ApiStatusError { status: u16, message: String },

    #[error("Completion API returned no message content")]
    EmptyResponseError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Network,
    Api,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PromptError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ManualNotFound { .. } | Self::InvalidEncoding { .. } | Self::IoError(_) => {
                ErrorCategory::FileSystem
            }
            Self::RequestError(_) => ErrorCategory::Network,
            Self::ApiStatusError { .. } | Self::EmptyResponseError => ErrorCategory::Api,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路與服務端錯誤：稍後重新執行可能成功
            Self::RequestError(_) => ErrorSeverity::Medium,
            Self::ApiStatusError { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            Self::ApiStatusError { .. } | Self::EmptyResponseError => ErrorSeverity::High,
            Self::ManualNotFound { .. } | Self::InvalidEncoding { .. } => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => ErrorSeverity::High,
        }
    }

    /// 進程退出碼，一律非零
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ManualNotFound { path } => format!(
                "Run from a directory whose sibling contains the manual, or pass --manual-dir/--manual-file (looked for {})",
                path.display()
            ),
            Self::InvalidEncoding { .. } => "Re-save the manual as UTF-8".to_string(),
            Self::IoError(_) => "Check file permissions and available disk resources".to_string(),
            Self::RequestError(e) if e.is_timeout() => {
                "The model took too long; raise --timeout-seconds and try again".to_string()
            }
            Self::RequestError(_) => "Check network connectivity and --base-url".to_string(),
            Self::ApiStatusError { status: 401 | 403, .. } => {
                "Check that ARK_API_KEY holds a valid key".to_string()
            }
            Self::ApiStatusError { status: 404, .. } => {
                "Check --base-url and the --model identifier".to_string()
            }
            Self::ApiStatusError { status: 429, .. } => {
                "Rate limited; wait a moment before running again".to_string()
            }
            Self::ApiStatusError { .. } => "Inspect the API message above".to_string(),
            Self::EmptyResponseError => "Run again; the model produced no answer".to_string(),
            Self::SerializationError(_) => {
                "The endpoint did not return a chat-completion response; check --base-url"
                    .to_string()
            }
            Self::MissingConfigError { field } => {
                format!("Provide {} via CLI flag, environment or config file", field)
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::FileSystem => format!("Could not read the manual: {}", self),
            ErrorCategory::Network => format!("Could not reach the completion API: {}", self),
            ErrorCategory::Api => format!("The completion API rejected the request: {}", self),
            ErrorCategory::Data => format!("Unexpected response format: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptError>;
