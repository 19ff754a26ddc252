use std::path::PathBuf;

use clap::Parser;
use nutrivision_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_STORAGE_KEY, DEFAULT_TEMPERATURE,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrivision", about = "NutriVision meal photo nutrition estimator")]
pub struct Args {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long, env = "GEMINI_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub gemini_temperature: f64,

    #[arg(long, env = "GEMINI_TIMEOUT_SECS", default_value_t = 60)]
    pub gemini_timeout_secs: u64,

    #[arg(long, env = "NUTRIVISION_DATA_DIR", default_value = ".nutrivision")]
    pub data_dir: PathBuf,

    #[arg(long, env = "NUTRIVISION_STORAGE_KEY", default_value = DEFAULT_STORAGE_KEY)]
    pub storage_key: String,

    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

impl Args {
    /// Parses the command line after loading `.env` if present. Flags not given
    /// on the command line fall back to their environment variables.
    pub fn from_env() -> Result<Self, clap::Error> {
        dotenv::dotenv().ok();
        Self::try_parse()
    }
}
