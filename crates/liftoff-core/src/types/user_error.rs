//! Errors raised by user-authored code.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog code attached to a [`UserError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Uncategorized error.
    Generic,
    /// Fetching a resource failed.
    FetchError,
    /// A fetched resource was not found.
    FetchNotFound,
    /// The application configuration is invalid.
    BadConfig,
    /// Installing a package failed.
    PackageInstallError,
    /// A plugin file has an unsupported extension.
    BadPluginFileExtension,
    /// User code used top-level await.
    TopLevelAwait,
}

impl ErrorCode {
    /// Returns the catalog identifier, e.g. `"PY1000"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Generic => "PY0000",
            Self::FetchError => "PY0001",
            Self::FetchNotFound => "PY0404",
            Self::BadConfig => "PY1000",
            Self::PackageInstallError => "PY1001",
            Self::BadPluginFileExtension => "PY2000",
            Self::TopLevelAwait => "PY9000",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the error message should be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Plain text; must be escaped before display.
    #[default]
    Text,
    /// Trusted HTML.
    Html,
}

/// A failure in user-supplied code, reported to plugins via `on_user_error`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserError {
    /// Catalog code.
    pub code: ErrorCode,
    /// Human-readable message.
    pub message: String,
    /// Rendering hint for `message`.
    pub message_type: MessageType,
    /// When the error was raised.
    pub occurred_at: DateTime<Utc>,
}

impl UserError {
    /// Creates a plain-text user error timestamped now.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            message_type: MessageType::Text,
            occurred_at: Utc::now(),
        }
    }

    /// Marks the message as HTML.
    pub fn with_html(mut self) -> Self {
        self.message_type = MessageType::Html;
        self
    }
}

impl fmt::Display for UserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): {}", self.code, self.message)
    }
}

impl std::error::Error for UserError {}
