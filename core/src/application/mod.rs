use crate::{
    domain::{
        common::{JournalConfig, LLMConfig, entities::app_errors::CoreError},
        journal::services::MealJournal,
        nutrition::services::NutritionAnalyzer,
    },
    infrastructure::{llm::GeminiLLMClient, store::FileStore},
};

pub type NutrivisionService = NutritionAnalyzer<GeminiLLMClient>;
pub type LocalMealJournal = MealJournal<FileStore>;

pub fn create_service(config: &LLMConfig) -> Result<NutrivisionService, CoreError> {
    let llm_client = GeminiLLMClient::new(config)?;
    Ok(NutritionAnalyzer::new(llm_client))
}

/// Opens the on-device journal. A missing or corrupt journal file starts empty.
pub fn create_journal(config: &JournalConfig) -> Result<LocalMealJournal, CoreError> {
    let store = FileStore::new(&config.data_dir)?;
    Ok(MealJournal::load(store, &config.storage_key))
}
