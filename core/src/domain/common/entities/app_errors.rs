use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Image is empty")]
    EmptyImage,

    #[error("File size cannot exceed {max} bytes (got {size})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("Unsupported image type: {0}")]
    UnsupportedMediaType(String),

    #[error("No camera found")]
    CameraNotFound,

    #[error("Could not access camera: {0}")]
    CameraUnavailable(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::StorageError(e.to_string())
    }
}
