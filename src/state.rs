use std::sync::Arc;

use crate::config::Config;
use crate::translate::{TranslatorFactory, TranslatorInterface};

/// Shared application state. Requests are independent; nothing in here is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslatorInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create(&config.translator_config)?;
        Ok(Self { config, translator })
    }

    /// Build state around an existing backend, used by tests to plug in an
    /// in-memory fake.
    pub fn with_translator(config: Config, translator: Arc<dyn TranslatorInterface>) -> Self {
        Self { config, translator }
    }
}
