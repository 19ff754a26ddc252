use serde::Deserialize;

use crate::domain::nutrition::entities::Vitamin;

/// Nutrition object as the model returns it, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNutritionResponse {
    pub food_name: Option<String>,
    pub serving_size: Option<String>,
    pub calories: Option<f64>,
    pub protein: Option<GramAmount>,
    pub carbohydrates: Option<RawCarbohydrates>,
    pub fat: Option<RawFat>,
    pub vitamins: Option<Vec<Vitamin>>,
}

/// A bare number, or the older `{ "total": n, "unit": "g" }` shape.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum GramAmount {
    Value(f64),
    Detailed { total: f64 },
}

impl GramAmount {
    pub fn value(&self) -> f64 {
        match self {
            GramAmount::Value(v) => *v,
            GramAmount::Detailed { total } => *total,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawCarbohydrates {
    pub total: Option<f64>,
    pub sugar: Option<f64>,
    pub fiber: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawFat {
    pub total: Option<f64>,
    pub saturated: Option<f64>,
}
