use crate::domain::{capture::value_objects::FacingMode, common::entities::app_errors::CoreError};

/// Access to a physical camera. Device plumbing lives outside the core.
pub trait CameraDevice {
    type Stream: VideoStream;

    /// Opens a live stream. Returns `CoreError::CameraNotFound` when no camera
    /// matches `facing`.
    fn open(&self, facing: FacingMode) -> Result<Self::Stream, CoreError>;
}

pub trait VideoStream {
    /// Grabs the current frame encoded as JPEG.
    fn grab_jpeg_frame(&mut self) -> Result<Vec<u8>, CoreError>;

    /// Releases every track of the stream. Must be safe to call more than once.
    fn stop(&mut self);
}
