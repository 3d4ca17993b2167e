use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::info;

use super::google::GoogleTranslateClient;
use super::interface::TranslatorInterface;
use crate::config::TranslatorConfig;

/// Factory for creating the translation backend client
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build the configured backend client.
    ///
    /// # Arguments
    /// * `config` - translator section of the application config
    ///
    /// # Returns
    /// Shared TranslatorInterface implementation
    pub fn create(config: &TranslatorConfig) -> Result<Arc<dyn TranslatorInterface>> {
        info!("Initializing translation backend: {}", config.endpoint);

        let client = GoogleTranslateClient::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?;

        Ok(Arc::new(client))
    }
}
