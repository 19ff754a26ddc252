use nutrivision_core::domain::{
    common::entities::app_errors::CoreError, nutrition::errors::AnalysisError,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("An analysis is already in progress")]
    AnalysisInProgress,

    #[error("No image selected")]
    NoImageSelected,

    #[error("No analysis result to log")]
    NothingToLog,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl SessionError {
    /// Text shown to the user in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            SessionError::Analysis(err) => err.user_message(),
            SessionError::Core(CoreError::FileTooLarge { .. }) => {
                "File size cannot exceed 4MB.".to_string()
            }
            SessionError::Core(CoreError::CameraNotFound) => {
                "No camera found on this device.".to_string()
            }
            SessionError::Core(CoreError::CameraUnavailable(_)) => {
                "Could not access the camera. Please check permissions.".to_string()
            }
            SessionError::InvalidEmail(_) => "Please enter a valid email address.".to_string(),
            SessionError::NoImageSelected => "Please select an image first.".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_for_analysis_errors() {
        let no_food = SessionError::from(AnalysisError::no_food_detected(
            "No food detected in the image.",
        ));
        assert_eq!(no_food.user_message(), "No food detected in the image.");

        let malformed = SessionError::from(AnalysisError::malformed_response("truncated JSON"));
        assert_eq!(malformed.user_message(), "AI analysis failed: truncated JSON");

        let transport = SessionError::from(AnalysisError::transport("connection reset"));
        assert_eq!(transport.user_message(), "AI analysis failed: connection reset");
    }

    #[test]
    fn test_user_message_for_oversized_file() {
        let err = SessionError::from(CoreError::FileTooLarge {
            size: 5 * 1024 * 1024,
            max: 4 * 1024 * 1024,
        });
        assert_eq!(err.user_message(), "File size cannot exceed 4MB.");
    }
}
