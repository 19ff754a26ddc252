use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::nutrition::{
    entities::{Carbohydrates, Fat, NutritionResult},
    errors::AnalysisError,
    value_objects::RawNutritionResponse,
};

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("code fence pattern is valid")
});

/// Trims the text and removes one enclosing ``` fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match CODE_FENCE.captures(trimmed).and_then(|c| c.get(2)) {
        Some(body) if !body.as_str().trim().is_empty() => body.as_str().trim(),
        _ => trimmed,
    }
}

/// Turns the model's raw text into a validated `NutritionResult`.
pub fn parse_nutrition_response(raw_response: &str) -> Result<NutritionResult, AnalysisError> {
    let body = strip_code_fence(raw_response);

    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        AnalysisError::malformed_response(format!("Failed to parse LLM response: {}", e))
    })?;

    if !parsed.is_object() {
        return Err(AnalysisError::malformed_response(
            "LLM response is not a JSON object",
        ));
    }

    if let Some(reason) = parsed.get("error").and_then(error_reason) {
        return Err(AnalysisError::no_food_detected(reason));
    }

    let raw: RawNutritionResponse = serde_json::from_value(parsed).map_err(|e| {
        tracing::error!("Invalid nutrition format: {}", e);
        AnalysisError::malformed_response(format!("Invalid nutrition format: {}", e))
    })?;

    validate_nutrition(raw)
}

/// Falsy values (null, false, zero, blank text, empty containers) mean no error.
fn error_reason(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(fields) if fields.is_empty() => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

/// Checks required fields and fills defaults for the optional breakdown.
pub(crate) fn validate_nutrition(
    raw: RawNutritionResponse,
) -> Result<NutritionResult, AnalysisError> {
    let food_name = raw
        .food_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AnalysisError::malformed_response("Missing foodName in LLM response"))?;

    let calories = raw
        .calories
        .ok_or_else(|| AnalysisError::malformed_response("Missing calories in LLM response"))?;

    let carbohydrates = raw.carbohydrates.unwrap_or_default();
    let fat = raw.fat.unwrap_or_default();

    Ok(NutritionResult {
        food_name,
        serving_size: raw
            .serving_size
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        calories: non_negative("calories", calories)?,
        protein: non_negative("protein", raw.protein.map(|p| p.value()).unwrap_or(0.0))?,
        carbohydrates: Carbohydrates {
            total: non_negative("carbohydrates.total", carbohydrates.total.unwrap_or(0.0))?,
            sugar: non_negative("carbohydrates.sugar", carbohydrates.sugar.unwrap_or(0.0))?,
            fiber: non_negative("carbohydrates.fiber", carbohydrates.fiber.unwrap_or(0.0))?,
        },
        fat: Fat {
            total: non_negative("fat.total", fat.total.unwrap_or(0.0))?,
            saturated: non_negative("fat.saturated", fat.saturated.unwrap_or(0.0))?,
        },
        vitamins: raw.vitamins.unwrap_or_default(),
    })
}

fn non_negative(field: &str, value: f64) -> Result<f64, AnalysisError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AnalysisError::malformed_response(format!(
            "Field {} must be a non-negative number, got {}",
            field, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::{entities::Vitamin, errors::AnalysisErrorKind};

    const SOUP: &str = r#"{
        "foodName": "Tomato Soup",
        "servingSize": "1 bowl (250ml)",
        "calories": 180,
        "protein": 4.5,
        "carbohydrates": { "total": 24, "sugar": 12, "fiber": 3 },
        "fat": { "total": 7.5, "saturated": 2 },
        "vitamins": [
            { "name": "Vitamin C", "amount": "25mg" },
            { "name": "Vitamin A", "amount": "120mcg" },
            { "name": "Potassium", "amount": "480mg" }
        ]
    }"#;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("\n```JSON {\"a\":1} ```\n"), "{\"a\":1}");
        assert_eq!(strip_code_fence("``````"), "``````");
    }

    #[test]
    fn test_parse_full_response() {
        let result = parse_nutrition_response(SOUP).unwrap();

        assert_eq!(result.food_name, "Tomato Soup");
        assert_eq!(result.serving_size, "1 bowl (250ml)");
        assert_eq!(result.calories, 180.0);
        assert_eq!(result.protein, 4.5);
        assert_eq!(
            result.carbohydrates,
            Carbohydrates {
                total: 24.0,
                sugar: 12.0,
                fiber: 3.0
            }
        );
        assert_eq!(
            result.fat,
            Fat {
                total: 7.5,
                saturated: 2.0
            }
        );
        let names: Vec<&str> = result.vitamins.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Vitamin C", "Vitamin A", "Potassium"]);
    }

    #[test]
    fn test_fenced_and_plain_responses_parse_identically() {
        let fenced = format!("```json\n{}\n```", SOUP);
        let bare_fence = format!("```\n{}\n```", SOUP);

        let plain = parse_nutrition_response(SOUP).unwrap();
        assert_eq!(parse_nutrition_response(&fenced).unwrap(), plain);
        assert_eq!(parse_nutrition_response(&bare_fence).unwrap(), plain);
    }

    #[test]
    fn test_error_field_means_no_food() {
        let err = parse_nutrition_response(r#"{"error": "No food detected in the image."}"#)
            .unwrap_err();

        assert_eq!(
            err,
            AnalysisError::no_food_detected("No food detected in the image.")
        );
    }

    #[test]
    fn test_fenced_error_field_means_no_food() {
        let err = parse_nutrition_response("```json\n{\"error\": \"Just a table\"}\n```")
            .unwrap_err();

        assert_eq!(err.kind, AnalysisErrorKind::NoFoodDetected);
        assert_eq!(err.message, "Just a table");
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let err = parse_nutrition_response(r#"{"foodName": "Soup""#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
    }

    #[test]
    fn test_prose_is_malformed() {
        let err = parse_nutrition_response("Sure! Here is the analysis you asked for.").unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = parse_nutrition_response("[1, 2, 3]").unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_food_name_is_malformed() {
        let err = parse_nutrition_response(r#"{"calories": 100}"#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
        assert!(err.message.contains("foodName"));

        let err = parse_nutrition_response(r#"{"foodName": "   ", "calories": 100}"#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_or_non_numeric_calories_is_malformed() {
        let err = parse_nutrition_response(r#"{"foodName": "Apple"}"#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
        assert!(err.message.contains("calories"));

        let err =
            parse_nutrition_response(r#"{"foodName": "Apple", "calories": "95"}"#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
    }

    #[test]
    fn test_negative_values_are_malformed() {
        let err = parse_nutrition_response(
            r#"{"foodName": "Apple", "calories": 95, "fat": {"total": -1}}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::MalformedResponse);
        assert!(err.message.contains("fat.total"));
    }

    #[test]
    fn test_zero_calories_is_accepted() {
        let result = parse_nutrition_response(r#"{"foodName": "Black Coffee", "calories": 0}"#)
            .unwrap();
        assert_eq!(result.calories, 0.0);
    }

    #[test]
    fn test_missing_breakdown_defaults_to_zero() {
        let result = parse_nutrition_response(
            r#"{"foodName": "Apple", "servingSize": "1 medium", "calories": 95, "protein": 0.5}"#,
        )
        .unwrap();

        assert_eq!(result.carbohydrates, Carbohydrates::default());
        assert_eq!(result.fat, Fat::default());
        assert!(result.vitamins.is_empty());
        assert_eq!(result.protein, 0.5);
    }

    #[test]
    fn test_legacy_total_unit_shape_is_normalized() {
        let result = parse_nutrition_response(
            r#"{
                "foodName": "Grilled Chicken",
                "servingSize": "100g",
                "calories": 165,
                "fat": { "total": 3.6, "unit": "g" },
                "carbohydrates": { "total": 0, "unit": "g" },
                "protein": { "total": 31, "unit": "g" },
                "vitamins": [{ "name": "Vitamin B6", "amount": "0.6mg" }]
            }"#,
        )
        .unwrap();

        assert_eq!(result.protein, 31.0);
        assert_eq!(result.fat.total, 3.6);
        assert_eq!(result.carbohydrates.total, 0.0);
        assert_eq!(
            result.vitamins,
            vec![Vitamin {
                name: "Vitamin B6".to_string(),
                amount: "0.6mg".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_error_field_is_ignored() {
        let result =
            parse_nutrition_response(r#"{"error": "", "foodName": "Toast", "calories": 80}"#)
                .unwrap();
        assert_eq!(result.food_name, "Toast");
    }

    #[test]
    fn test_falsy_error_values_are_ignored() {
        for error in ["0", "0.0", "[]", "{}", "null", "false"] {
            let body = format!(r#"{{"error": {error}, "foodName": "Toast", "calories": 80}}"#);
            let result = parse_nutrition_response(&body).unwrap();
            assert_eq!(result.food_name, "Toast", "error value {error}");
        }
    }

    #[test]
    fn test_non_zero_error_number_means_no_food() {
        let err = parse_nutrition_response(r#"{"error": 1}"#).unwrap_err();
        assert_eq!(err.kind, AnalysisErrorKind::NoFoodDetected);
        assert_eq!(err.message, "1");
    }
}
