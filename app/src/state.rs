use anyhow::Context;
use nutrivision_core::{
    application::{NutrivisionService, create_journal, create_service},
    domain::common::NutrivisionConfig,
    infrastructure::store::FileStore,
};

use crate::{args::Args, logging::init_tracing, session::Session};

pub type LocalSession = Session<NutrivisionService, FileStore>;

/// Wires configuration, logging, the Gemini-backed analyzer and the on-disk journal.
pub fn build_session(args: Args) -> Result<LocalSession, anyhow::Error> {
    init_tracing(&args.log_filter, args.log_json);

    let config = NutrivisionConfig::from(args);
    let service = create_service(&config.llm).context("failed to create analysis service")?;
    let journal = create_journal(&config.journal).context("failed to open meal journal")?;

    tracing::info!(
        model = %config.llm.gemini_model,
        data_dir = %config.journal.data_dir.display(),
        meals = journal.meals().len(),
        "NutriVision session ready"
    );

    Ok(Session::new(service, journal))
}
