use serde::{Deserialize, Serialize};

/// Validated nutrition breakdown for one analyzed meal photo. Gram units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionResult {
    pub food_name: String,
    pub serving_size: String,
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: Carbohydrates,
    pub fat: Fat,
    #[serde(default)]
    pub vitamins: Vec<Vitamin>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Carbohydrates {
    pub total: f64,
    #[serde(default)]
    pub sugar: f64,
    #[serde(default)]
    pub fiber: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Fat {
    pub total: f64,
    #[serde(default)]
    pub saturated: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitamin {
    pub name: String,
    pub amount: String,
}
