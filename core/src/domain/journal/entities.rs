use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{common::generate_uuid_v7, nutrition::entities::NutritionResult};

/// Opaque meal identifier. Fresh ids are UUIDv7 strings; stored ids are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(String);

impl MealId {
    pub fn generate() -> Self {
        Self(generate_uuid_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MealId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MealId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declaration order is the display and sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum MealType {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nutrition result logged against a date and meal type. Read-only once logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedMeal {
    id: MealId,
    date: NaiveDate,
    meal_type: MealType,
    #[serde(flatten)]
    nutrition: NutritionResult,
}

impl TrackedMeal {
    pub(crate) fn new(nutrition: NutritionResult, meal_type: MealType, date: NaiveDate) -> Self {
        Self::restore(MealId::generate(), date, meal_type, nutrition)
    }

    /// Rebuilds a meal read back from storage, keeping its id.
    pub(crate) fn restore(
        id: MealId,
        date: NaiveDate,
        meal_type: MealType,
        nutrition: NutritionResult,
    ) -> Self {
        Self {
            id,
            date,
            meal_type,
            nutrition,
        }
    }

    pub fn id(&self) -> &MealId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn nutrition(&self) -> &NutritionResult {
        &self.nutrition
    }

    pub fn calories(&self) -> f64 {
        self.nutrition.calories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::nutrition::entities::{Carbohydrates, Fat, Vitamin};

    #[test]
    fn test_meal_type_order() {
        let mut types = vec![MealType::Snack, MealType::Dinner, MealType::Breakfast, MealType::Lunch];
        types.sort();
        assert_eq!(types, MealType::ALL.to_vec());
    }

    #[test]
    fn test_tracked_meal_wire_format() {
        let meal = TrackedMeal {
            id: MealId::from("3f1c2a9e-0000-4000-8000-000000000001"),
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            meal_type: MealType::Lunch,
            nutrition: NutritionResult {
                food_name: "Caesar Salad".to_string(),
                serving_size: "1 plate".to_string(),
                calories: 350.0,
                protein: 12.0,
                carbohydrates: Carbohydrates {
                    total: 15.0,
                    sugar: 3.0,
                    fiber: 4.0,
                },
                fat: Fat {
                    total: 28.0,
                    saturated: 6.0,
                },
                vitamins: vec![Vitamin {
                    name: "Vitamin K".to_string(),
                    amount: "100mcg".to_string(),
                }],
            },
        };

        let json = serde_json::to_value(&meal).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "3f1c2a9e-0000-4000-8000-000000000001",
                "date": "2026-10-16",
                "mealType": "Lunch",
                "foodName": "Caesar Salad",
                "servingSize": "1 plate",
                "calories": 350.0,
                "protein": 12.0,
                "carbohydrates": { "total": 15.0, "sugar": 3.0, "fiber": 4.0 },
                "fat": { "total": 28.0, "saturated": 6.0 },
                "vitamins": [{ "name": "Vitamin K", "amount": "100mcg" }]
            })
        );

        let back: TrackedMeal = serde_json::from_value(json).unwrap();
        assert_eq!(back, meal);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = MealId::generate();
        let b = MealId::generate();
        assert_ne!(a, b);
    }
}
