use chrono::NaiveDate;
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, local_today},
    journal::{
        entities::{MealId, MealType, TrackedMeal},
        ports::PersistedStore,
        value_objects::{DaySummary, WeeklyOverview, day_label, week_dates},
    },
    nutrition::{
        entities::NutritionResult, helpers::validate_nutrition,
        value_objects::RawNutritionResponse,
    },
};

/// Meal log backed by a `PersistedStore`. The in-memory collection is
/// authoritative; every mutation rewrites the whole collection under one key.
/// A journal whose stored value could not be read never writes that key back.
#[derive(Debug)]
pub struct MealJournal<S: PersistedStore> {
    store: S,
    key: String,
    meals: Vec<TrackedMeal>,
    persisted: bool,
    writable: bool,
}

impl<S: PersistedStore> MealJournal<S> {
    /// Loads the journal. Absent, unreadable or corrupt state yields an empty journal.
    /// After a read failure the journal stays in memory for its whole lifetime.
    #[instrument(skip(store))]
    pub fn load(store: S, key: &str) -> Self {
        let (meals, writable) = match store.read(key) {
            Ok(Some(bytes)) => match decode_meals(&bytes) {
                Ok(meals) => (meals, true),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored meals are corrupt, starting with an empty journal");
                    (Vec::new(), true)
                }
            },
            Ok(None) => (Vec::new(), true),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to read stored meals, keeping this journal in memory only"
                );
                (Vec::new(), false)
            }
        };

        tracing::debug!(count = meals.len(), "Meal journal loaded");

        Self {
            store,
            key: key.to_string(),
            meals,
            persisted: writable,
            writable,
        }
    }

    /// Logs a meal against today's local date.
    pub fn log(&mut self, result: NutritionResult, meal_type: MealType) -> TrackedMeal {
        self.log_on(result, meal_type, local_today())
    }

    /// Logs a meal against an explicit date. Newest entries come first.
    #[instrument(skip(self, result), fields(food_name = %result.food_name))]
    pub(crate) fn log_on(
        &mut self,
        result: NutritionResult,
        meal_type: MealType,
        date: NaiveDate,
    ) -> TrackedMeal {
        let meal = TrackedMeal::new(result, meal_type, date);
        self.meals.insert(0, meal.clone());
        self.flush();

        tracing::info!(meal_id = %meal.id(), %date, %meal_type, "Meal logged");

        meal
    }

    /// Removes the meal if present. Unknown ids are not an error.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &MealId) {
        let before = self.meals.len();
        self.meals.retain(|m| m.id() != id);

        if self.meals.len() == before {
            tracing::debug!(meal_id = %id, "Meal not found, nothing deleted");
        } else {
            tracing::info!(meal_id = %id, "Meal deleted");
        }

        self.flush();
    }

    pub fn meals(&self) -> &[TrackedMeal] {
        &self.meals
    }

    pub fn get(&self, id: &MealId) -> Option<&TrackedMeal> {
        self.meals.iter().find(|m| m.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Meals of `date` in Breakfast, Lunch, Dinner, Snack order; ties keep collection order.
    pub fn meals_for_date(&self, date: NaiveDate) -> Vec<TrackedMeal> {
        let mut meals: Vec<TrackedMeal> = self
            .meals
            .iter()
            .filter(|m| m.date() == date)
            .cloned()
            .collect();
        meals.sort_by_key(|m| m.meal_type());
        meals
    }

    pub fn total_calories_for_date(&self, date: NaiveDate) -> f64 {
        self.meals
            .iter()
            .filter(|m| m.date() == date)
            .map(|m| m.calories())
            .sum()
    }

    pub fn day_summary(&self, date: NaiveDate, today: NaiveDate) -> DaySummary {
        let meals = self.meals_for_date(date);
        let total_calories = meals.iter().map(|m| m.calories()).sum();

        DaySummary {
            date,
            label: day_label(date, today),
            meals,
            total_calories,
        }
    }

    /// Today and the six days before it.
    pub fn week_overview(&self, today: NaiveDate) -> WeeklyOverview {
        WeeklyOverview {
            days: week_dates(today)
                .into_iter()
                .map(|date| self.day_summary(date, today))
                .collect(),
        }
    }

    /// Whether the last write to the store succeeded. Always false for a
    /// journal that could not read its stored value.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Writes the full collection. Failure is logged and leaves memory authoritative.
    pub fn flush(&mut self) -> bool {
        if !self.writable {
            tracing::debug!(key = %self.key, "Journal is in memory only, skipping write");
            self.persisted = false;
            return false;
        }

        let result = encode_meals(&self.meals).and_then(|bytes| self.store.write(&self.key, &bytes));

        match result {
            Ok(()) => self.persisted = true,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %self.key,
                    "Failed to persist meal journal, continuing in memory"
                );
                self.persisted = false;
            }
        }

        self.persisted
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// One stored record. Nutrition goes through the same normalization as a fresh
/// reply, so records saved with `{ "total": n, "unit": "g" }` amounts still load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredMeal {
    id: MealId,
    date: NaiveDate,
    meal_type: MealType,
    #[serde(flatten)]
    nutrition: RawNutritionResponse,
}

fn decode_meals(bytes: &[u8]) -> Result<Vec<TrackedMeal>, CoreError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records: Vec<StoredMeal> = serde_json::from_slice(bytes)?;
    records
        .into_iter()
        .map(|record| {
            let nutrition = validate_nutrition(record.nutrition).map_err(|e| {
                CoreError::SerializationError(format!("meal {}: {}", record.id, e.message))
            })?;
            Ok(TrackedMeal::restore(
                record.id,
                record.date,
                record.meal_type,
                nutrition,
            ))
        })
        .collect()
}

fn encode_meals(meals: &[TrackedMeal]) -> Result<Vec<u8>, CoreError> {
    Ok(serde_json::to_vec(meals)?)
}
