use std::future::Future;

use crate::domain::{
    capture::{entities::CapturedImage, value_objects::ImageMimeType},
    common::entities::app_errors::CoreError,
    nutrition::{entities::NutritionResult, errors::AnalysisError},
};

/// LLM Client trait for calling multimodal AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one image plus instruction and returns the model's raw text.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: ImageMimeType,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal photo analysis
#[cfg_attr(test, mockall::automock)]
pub trait NutritionAnalysisService: Send + Sync {
    /// Single attempt, no retries. Every failure comes back as an `AnalysisError`.
    fn analyze(
        &self,
        image: CapturedImage,
    ) -> impl Future<Output = Result<NutritionResult, AnalysisError>> + Send;
}
