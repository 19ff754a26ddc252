use serde_json::json;

pub const NO_FOOD_MESSAGE: &str = "No food detected in the image.";

/// Returns the JSON template the model is asked to fill in.
pub fn get_nutrition_template() -> serde_json::Value {
    json!({
        "foodName": "string",
        "servingSize": "string (e.g., '1 cup' or '100g')",
        "calories": "number",
        "protein": "number (grams)",
        "carbohydrates": {
            "total": "number (grams)",
            "sugar": "number (grams)",
            "fiber": "number (grams)"
        },
        "fat": {
            "total": "number (grams)",
            "saturated": "number (grams)"
        },
        "vitamins": [
            { "name": "string", "amount": "string (value and unit, e.g., '1.2mg')" }
        ]
    })
}

/// Returns the object the model must send back when it sees no food.
pub fn get_no_food_response() -> serde_json::Value {
    json!({ "error": NO_FOOD_MESSAGE })
}
