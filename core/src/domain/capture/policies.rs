use crate::domain::{
    capture::value_objects::ImageMimeType, common::entities::app_errors::CoreError,
};

pub const MAX_IMAGE_SIZE: u64 = 4 * 1024 * 1024; // 4 MiB

pub fn ensure_size_within_limit(size: u64) -> Result<(), CoreError> {
    if size > MAX_IMAGE_SIZE {
        return Err(CoreError::FileTooLarge {
            size,
            max: MAX_IMAGE_SIZE,
        });
    }
    Ok(())
}

/// Checks an image payload before it may be sent for analysis.
pub fn ensure_image_acceptable(data: &[u8], mime_type: &str) -> Result<ImageMimeType, CoreError> {
    if data.is_empty() {
        return Err(CoreError::EmptyImage);
    }
    ensure_size_within_limit(data.len() as u64)?;

    ImageMimeType::from_mime(mime_type)
        .ok_or_else(|| CoreError::UnsupportedMediaType(mime_type.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_supported_types() {
        assert_eq!(
            ensure_image_acceptable(&[1, 2, 3], "image/jpeg"),
            Ok(ImageMimeType::Jpeg)
        );
        assert_eq!(
            ensure_image_acceptable(&[1], "IMAGE/PNG"),
            Ok(ImageMimeType::Png)
        );
        assert_eq!(
            ensure_image_acceptable(&[1], "image/webp; charset=binary"),
            Ok(ImageMimeType::Webp)
        );
    }

    #[test]
    fn test_rejects_empty_payload() {
        assert_eq!(
            ensure_image_acceptable(&[], "image/jpeg"),
            Err(CoreError::EmptyImage)
        );
    }

    #[test]
    fn test_rejects_unsupported_type() {
        assert_eq!(
            ensure_image_acceptable(&[1], "image/gif"),
            Err(CoreError::UnsupportedMediaType("image/gif".to_string()))
        );
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let at_limit = vec![0u8; MAX_IMAGE_SIZE as usize];
        assert!(ensure_image_acceptable(&at_limit, "image/png").is_ok());

        let over = vec![0u8; MAX_IMAGE_SIZE as usize + 1];
        assert_eq!(
            ensure_image_acceptable(&over, "image/png"),
            Err(CoreError::FileTooLarge {
                size: MAX_IMAGE_SIZE + 1,
                max: MAX_IMAGE_SIZE,
            })
        );
    }
}
