//! JSON output structures.
//!
//! Every command answers with the same envelope: `{"success": true, ...}`
//! on success, `{"success": false, "error": {...}}` on failure.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use serde::{Deserialize, Serialize};

/// Standard JSON success response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSuccess<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> JsonSuccess<T> {
    /// Create a new success response
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> JsonSuccess<T> {
    /// Convert to a pretty JSON string
    ///
    /// # Errors
    ///
    /// Returns error if `T` fails to serialize.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Standard JSON error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonError {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Detailed error information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`SCREAMING_SNAKE_CASE`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Process exit code
    pub exit_code: u8,
    /// Optional suggestion for resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Create a new JSON error with a code, message and exit code
    pub fn new(code: impl Into<String>, message: impl Into<String>, exit_code: u8) -> Self {
        Self {
            success: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                exit_code,
                suggestion: None,
            },
        }
    }

    /// Build from a command failure, keeping the typed code when there is one.
    pub fn from_error(err: &anyhow::Error) -> Self {
        let message = format!("{err:#}");
        match err.downcast_ref::<depwalk_core::Error>() {
            Some(core) => Self::new(core.code(), message, core.exit_code())
                .with_optional_suggestion(suggestion_for(core)),
            None => Self::new("UNKNOWN", message, 1),
        }
    }

    /// Add a suggestion to the error
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.error.suggestion = Some(suggestion.into());
        self
    }

    fn with_optional_suggestion(self, suggestion: Option<&str>) -> Self {
        match suggestion {
            Some(text) => self.with_suggestion(text),
            None => self,
        }
    }

    /// Convert to a pretty JSON string
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn suggestion_for(err: &depwalk_core::Error) -> Option<&'static str> {
    use depwalk_core::Error;

    match err {
        Error::ConfigReadFailed { .. } => {
            Some("Pass --config <file>, or supply --package, --source and --mode")
        }
        Error::InvalidConfig { .. } | Error::UnsupportedSourceMode { .. } => {
            Some("Run 'depwalk config' to inspect the resolved settings")
        }
        Error::Graph(depwalk_graph::GraphError::CycleDetected(_)) => {
            Some("Run 'depwalk order' without --strict to skip back edges")
        }
        _ => None,
    }
}
