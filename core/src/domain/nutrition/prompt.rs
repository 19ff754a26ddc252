use crate::domain::nutrition::schema::{get_no_food_response, get_nutrition_template};

/// Builds the fixed instruction sent with every image.
pub fn build_nutrition_prompt() -> String {
    let template =
        serde_json::to_string_pretty(&get_nutrition_template()).unwrap_or_else(|_| "{}".into());
    let no_food = get_no_food_response().to_string();

    format!(
        "Analyze the food item in this image. Act as an expert nutritionist.\n\
         Identify the dish and provide a detailed nutritional analysis for a standard serving size.\n\
         Your response MUST be a single JSON object. Do not include any text, markdown formatting, \
         or code fences before or after the JSON object.\n\
         All nutrient amounts are in grams and must be non-negative numbers.\n\
         The JSON object must strictly follow this structure:\n\
         {template}\n\
         If the image does not contain food, return exactly this JSON object instead: {no_food}"
    )
}
