use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::journal::entities::TrackedMeal;

pub const WEEK_LENGTH: u64 = 7;

/// Meals of one calendar day, already in meal-type order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub label: String,
    pub meals: Vec<TrackedMeal>,
    pub total_calories: f64,
}

/// Today plus the six days before it, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyOverview {
    pub days: Vec<DaySummary>,
}

impl WeeklyOverview {
    pub fn day(&self, date: NaiveDate) -> Option<&DaySummary> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn total_calories(&self) -> f64 {
        self.days.iter().map(|d| d.total_calories).sum()
    }
}

/// The dates of the week window ending at `today`, newest first.
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_LENGTH)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .collect()
}

/// `Today`, `Yesterday`, otherwise short weekday and day of month (`Thu 15`).
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if today.checked_sub_days(Days::new(1)) == Some(date) {
        return "Yesterday".to_string();
    }
    date.format("%a %-d").to_string()
}
