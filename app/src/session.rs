use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use nutrivision_core::domain::{
    capture::entities::CapturedImage,
    common::local_today,
    journal::{
        MealJournal,
        entities::{MealId, MealType, TrackedMeal},
        ports::PersistedStore,
        value_objects::WeeklyOverview,
    },
    nutrition::{entities::NutritionResult, ports::NutritionAnalysisService},
};
use tracing::instrument;

use crate::errors::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
}

/// Single-flight flag for analyses. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct AnalysisGate {
    busy: Arc<AtomicBool>,
}

/// Releases the gate on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
}

impl AnalysisGate {
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

pub struct Session<A, S>
where
    A: NutritionAnalysisService,
    S: PersistedStore,
{
    analyzer: A,
    journal: MealJournal<S>,
    gate: AnalysisGate,
    user: Option<User>,
    image: Option<CapturedImage>,
    result: Option<NutritionResult>,
    meal_type: MealType,
}

impl<A, S> Session<A, S>
where
    A: NutritionAnalysisService,
    S: PersistedStore,
{
    pub fn new(analyzer: A, journal: MealJournal<S>) -> Self {
        Self {
            analyzer,
            journal,
            gate: AnalysisGate::default(),
            user: None,
            image: None,
            result: None,
            meal_type: MealType::default(),
        }
    }

    /// Email-only sign in.
    pub fn login(&mut self, email: &str) -> Result<&User, SessionError> {
        let email = email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(SessionError::InvalidEmail(email.to_string()));
        }

        tracing::info!(email = %email, "User logged in");
        Ok(self.user.insert(User {
            email: email.to_string(),
        }))
    }

    /// Clears the user and transient state. Logged meals are kept.
    pub fn logout(&mut self) {
        self.user = None;
        self.image = None;
        self.result = None;
        self.meal_type = MealType::default();
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn select_image(&mut self, image: CapturedImage) {
        self.image = Some(image);
        self.result = None;
    }

    pub fn selected_image(&self) -> Option<&CapturedImage> {
        self.image.as_ref()
    }

    pub fn set_meal_type(&mut self, meal_type: MealType) {
        self.meal_type = meal_type;
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn result(&self) -> Option<&NutritionResult> {
        self.result.as_ref()
    }

    #[instrument(skip(self))]
    pub async fn analyze(&mut self) -> Result<&NutritionResult, SessionError> {
        if self.user.is_none() {
            return Err(SessionError::NotAuthenticated);
        }
        let image = self.image.clone().ok_or(SessionError::NoImageSelected)?;
        let _guard = self
            .gate
            .try_acquire()
            .ok_or(SessionError::AnalysisInProgress)?;

        self.result = None;
        let result = self.analyzer.analyze(image).await.map_err(|e| {
            tracing::warn!(kind = %e.kind, "Analysis failed: {}", e.message);
            SessionError::from(e)
        })?;

        Ok(self.result.insert(result))
    }

    /// Logs the current result under the selected meal type and clears the selection.
    pub fn log_meal(&mut self) -> Result<TrackedMeal, SessionError> {
        let result = self.result.take().ok_or(SessionError::NothingToLog)?;
        let meal = self.journal.log(result, self.meal_type);
        self.image = None;
        Ok(meal)
    }

    pub fn delete_meal(&mut self, id: &MealId) {
        self.journal.delete(id);
    }

    pub fn weekly_overview(&self) -> WeeklyOverview {
        self.journal.week_overview(local_today())
    }

    pub fn is_analyzing(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn gate(&self) -> &AnalysisGate {
        &self.gate
    }

    pub fn journal(&self) -> &MealJournal<S> {
        &self.journal
    }
}
