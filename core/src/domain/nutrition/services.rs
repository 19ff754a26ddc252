use tracing::instrument;

use crate::domain::{
    capture::entities::CapturedImage,
    nutrition::{
        entities::NutritionResult,
        errors::AnalysisError,
        helpers::parse_nutrition_response,
        ports::{LLMClient, NutritionAnalysisService},
        prompt::build_nutrition_prompt,
    },
};

#[derive(Debug, Clone)]
pub struct NutritionAnalyzer<LLM: LLMClient> {
    llm_client: LLM,
    prompt: String,
}

impl<LLM: LLMClient> NutritionAnalyzer<LLM> {
    pub fn new(llm_client: LLM) -> Self {
        Self {
            llm_client,
            prompt: build_nutrition_prompt(),
        }
    }
}

impl<LLM> NutritionAnalysisService for NutritionAnalyzer<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self, image), fields(mime_type = %image.mime_type(), size = image.size()))]
    async fn analyze(&self, image: CapturedImage) -> Result<NutritionResult, AnalysisError> {
        let raw_response = self
            .llm_client
            .generate_with_image(self.prompt.clone(), image.data().to_vec(), image.mime_type())
            .await
            .map_err(|e| {
                tracing::error!("Nutrition analysis request failed: {}", e);
                AnalysisError::from(e)
            })?;

        tracing::debug!(response_len = raw_response.len(), "Received LLM response");

        let result = parse_nutrition_response(&raw_response)?;

        tracing::info!(
            food_name = %result.food_name,
            calories = result.calories,
            "Nutrition analysis completed"
        );

        Ok(result)
    }
}
