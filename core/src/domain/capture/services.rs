use std::path::Path;

use tracing::instrument;

use crate::domain::{
    capture::{
        entities::CapturedImage,
        policies::ensure_size_within_limit,
        ports::{CameraDevice, VideoStream},
        value_objects::{CaptureSource, FacingMode, ImageMimeType},
    },
    common::entities::app_errors::CoreError,
};

/// Accepts bytes handed over by a file picker.
pub fn capture_from_bytes(
    data: impl Into<bytes::Bytes>,
    mime_type: &str,
    file_name: Option<String>,
) -> Result<CapturedImage, CoreError> {
    CapturedImage::new(data, mime_type, CaptureSource::FilePicker { file_name })
}

/// Reads an image from disk. The size is checked before the file is read.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn capture_from_file(path: &Path) -> Result<CapturedImage, CoreError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let mime_type = ImageMimeType::from_extension(ext)
        .ok_or_else(|| CoreError::UnsupportedMediaType(format!("file extension '{}'", ext)))?;

    let metadata = std::fs::metadata(path)?;
    ensure_size_within_limit(metadata.len())?;

    let data = std::fs::read(path)?;
    CapturedImage::new(
        data,
        mime_type.as_str(),
        CaptureSource::File(path.to_path_buf()),
    )
}

/// Stops the wrapped stream when dropped, whatever path the capture took.
struct StreamGuard<S: VideoStream> {
    stream: S,
}

impl<S: VideoStream> Drop for StreamGuard<S> {
    fn drop(&mut self) {
        self.stream.stop();
    }
}

/// Takes one JPEG still from the camera, preferring the rear one.
pub fn capture_from_camera<D: CameraDevice>(device: &D) -> Result<CapturedImage, CoreError> {
    let stream = match device.open(FacingMode::Environment) {
        Ok(stream) => stream,
        Err(CoreError::CameraNotFound) => {
            tracing::warn!("Environment camera not found, trying default camera");
            device.open(FacingMode::Any)?
        }
        Err(e) => return Err(e),
    };

    let mut guard = StreamGuard { stream };
    let frame = guard.stream.grab_jpeg_frame()?;

    CapturedImage::new(frame, ImageMimeType::Jpeg.as_str(), CaptureSource::Camera)
}
