use std::time::Duration;

use nutrivision_core::domain::common::{JournalConfig, LLMConfig, NutrivisionConfig};

use crate::args::Args;

impl From<Args> for NutrivisionConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.gemini_api_key,
                gemini_model: args.gemini_model,
                base_url: args.gemini_base_url,
                temperature: args.gemini_temperature,
                request_timeout: Duration::from_secs(args.gemini_timeout_secs),
            },
            journal: JournalConfig {
                data_dir: args.data_dir,
                storage_key: args.storage_key,
            },
        }
    }
}
