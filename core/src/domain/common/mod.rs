use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_STORAGE_KEY: &str = "nutrivision_meals";

#[derive(Clone, Debug)]
pub struct NutrivisionConfig {
    pub llm: LLMConfig,
    pub journal: JournalConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub base_url: String,
    pub temperature: f64,
    pub request_timeout: Duration,
}

impl LLMConfig {
    pub fn new(gemini_api_key: String) -> Self {
        Self {
            gemini_api_key,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            request_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone, Debug)]
pub struct JournalConfig {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".nutrivision"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

/// Calendar date on the device's local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
