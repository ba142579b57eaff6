//! Application state management

use std::path::Path;
use std::sync::Arc;

use crate::assets::AssetLookup;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    assets: Arc<dyn AssetLookup>,
}

impl AppState {
    /// Create a new application state around an asset lookup
    pub fn new(config: Config, assets: Arc<dyn AssetLookup>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, assets }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the asset lookup
    pub fn assets(&self) -> &Arc<dyn AssetLookup> {
        &self.inner.assets
    }

    /// Directory the lookups are resolved against
    pub fn asset_root(&self) -> &Path {
        &self.inner.config.assets.root
    }
}
