use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Error severity for host display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,    // informational
    Warning, // recoverable, e.g. a rejected edit
    Error,   // setup code is wrong
}

/// Domain-specific errors for the storybook core
#[derive(Error, Debug)]
pub enum StorybookError {
    #[error("StoryId cannot be blank")]
    BlankStoryId,

    #[error("PropBinding key cannot be blank")]
    BlankControlKey,

    #[error("EnumControl '{label}' must have at least one value")]
    EmptyEnumValues { label: String },

    #[error("Story '{id}' must have a render function")]
    MissingRender { id: String },

    #[error("Story '{story}' already has a control with key '{key}'")]
    DuplicateControlKey { story: String, key: String },

    #[error("Story with id '{id}' is already registered")]
    DuplicateStory { id: String },

    #[error("No story registered with id '{id}'")]
    StoryNotFound { id: String },

    #[error("No story is selected")]
    NoSelection,

    #[error("Story '{story}' has no control with key '{key}'")]
    UnknownControl { story: String, key: String },

    #[error("Control '{key}' expects a {expected} value, got {found}")]
    ControlValueMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Control '{key}' has {len} options, index {index} is out of range")]
    ChoiceOutOfRange { key: String, index: usize, len: usize },

    #[error("Failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorybookError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BlankStoryId
            | Self::BlankControlKey
            | Self::EmptyEnumValues { .. }
            | Self::MissingRender { .. }
            | Self::DuplicateControlKey { .. }
            | Self::DuplicateStory { .. } => ErrorSeverity::Error,
            Self::StoryNotFound { .. } => ErrorSeverity::Info,
            Self::NoSelection
            | Self::UnknownControl { .. }
            | Self::ControlValueMismatch { .. }
            | Self::ChoiceOutOfRange { .. } => ErrorSeverity::Warning,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => ErrorSeverity::Warning,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::StoryNotFound { id } => format!("No story named '{}'", id),
            Self::UnknownControl { key, .. } => format!("This story has no '{}' control", key),
            Self::ControlValueMismatch { key, expected, .. } => {
                format!("'{}' needs a {} value", key, expected)
            }
            Self::ChoiceOutOfRange { key, len, .. } => {
                format!("'{}' only has {} options", key, len)
            }
            Self::ConfigRead { path, .. } | Self::ConfigParse { path, .. } => {
                format!("Could not load configuration from {}", path.display())
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorybookError>;

/// Extension trait for logging an error and continuing.
///
/// Includes the caller's file/line via `#[track_caller]`.
///
/// ```ignore
/// use composebook::error::ResultExt;
///
/// let config = load_config_from(&path).warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
