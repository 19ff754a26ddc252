use bytes::Bytes;

use crate::domain::{
    capture::{
        policies::ensure_image_acceptable,
        value_objects::{CaptureSource, ImageMimeType},
    },
    common::entities::app_errors::CoreError,
};

/// A validated image payload, ready to be sent for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    data: Bytes,
    mime_type: ImageMimeType,
    source: CaptureSource,
}

impl CapturedImage {
    pub fn new(
        data: impl Into<Bytes>,
        mime_type: &str,
        source: CaptureSource,
    ) -> Result<Self, CoreError> {
        let data = data.into();
        let mime_type = ensure_image_acceptable(&data, mime_type)?;

        Ok(Self {
            data,
            mime_type,
            source,
        })
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    pub fn source(&self) -> &CaptureSource {
        &self.source
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }
}
