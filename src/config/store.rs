//! Process-wide configuration storage.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::RewriterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Shared configuration cell.
///
/// Holds the active `RewriterConfig` behind an atomic pointer so link
/// generation can snapshot it per call while the application replaces it
/// at any time. Mutation only succeeds through the validating setters;
/// a rejected config leaves the current one active.
pub struct ConfigStore {
    inner: ArcSwap<RewriterConfig>,
}

impl ConfigStore {
    /// Create a store holding the default configuration.
    pub fn new() -> Self {
        Self::with_config(RewriterConfig::default())
    }

    /// Create a store holding `config`. The value is trusted as-is; use
    /// `set` when validation is wanted.
    pub fn with_config(config: RewriterConfig) -> Self {
        Self {
            inner: ArcSwap::from_pointee(config),
        }
    }

    /// Snapshot of the active configuration.
    pub fn snapshot(&self) -> Arc<RewriterConfig> {
        self.inner.load_full()
    }

    /// Replace the active configuration after validating it.
    pub fn set(&self, config: RewriterConfig) -> Result<(), Vec<ValidationError>> {
        validate_config(&config)?;
        tracing::debug!(
            profile = %config.profile,
            tld_size = config.tld_size(),
            "configuration replaced"
        );
        self.inner.store(Arc::new(config));
        Ok(())
    }

    /// Mutate a copy of the active configuration and swap it in.
    pub fn update(
        &self,
        mutate: impl FnOnce(&mut RewriterConfig),
    ) -> Result<(), Vec<ValidationError>> {
        let mut config = (*self.snapshot()).clone();
        mutate(&mut config);
        self.set(config)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
