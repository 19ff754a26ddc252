use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisErrorKind {
    NoFoodDetected,
    MalformedResponse,
    TransportError,
}

impl AnalysisErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisErrorKind::NoFoodDetected => "no-food-detected",
            AnalysisErrorKind::MalformedResponse => "malformed-response",
            AnalysisErrorKind::TransportError => "transport-error",
        }
    }
}

impl fmt::Display for AnalysisErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized failure of the analysis step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct AnalysisError {
    pub kind: AnalysisErrorKind,
    pub message: String,
}

impl AnalysisError {
    pub fn no_food_detected(message: impl Into<String>) -> Self {
        Self {
            kind: AnalysisErrorKind::NoFoodDetected,
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self {
            kind: AnalysisErrorKind::MalformedResponse,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: AnalysisErrorKind::TransportError,
            message: message.into(),
        }
    }

    /// Text shown to the user. Malformed responses read like transport failures.
    pub fn user_message(&self) -> String {
        match self.kind {
            AnalysisErrorKind::NoFoodDetected => self.message.clone(),
            AnalysisErrorKind::MalformedResponse | AnalysisErrorKind::TransportError => {
                format!("AI analysis failed: {}", self.message)
            }
        }
    }
}

impl From<CoreError> for AnalysisError {
    fn from(e: CoreError) -> Self {
        AnalysisError::transport(e.to_string())
    }
}
