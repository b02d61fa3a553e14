//! Tab group configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use tabkit_group::{IdAllocator, RandomIds, SequentialIds, TabVariant, DEFAULT_ID_PREFIX};
use tabkit_navigation::Orientation;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `"{prefix}-{n}"` from a process-wide counter
    #[default]
    Sequential,
    /// `"{prefix}-{uuid}"`
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for generated group ids
    pub id_prefix: String,
    pub id_strategy: IdStrategy,
    /// Styling hint passed through to the view
    pub variant: TabVariant,
    /// Which arrow keys move focus
    pub orientation: Orientation,
    /// Seed for uncontrolled groups
    pub default_active_tab: Option<String>,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), "Loaded tabs config");
        Ok(config)
    }

    /// Allocator matching this configuration.
    ///
    /// Sequential prefixes map onto one process-wide counter each, so every
    /// group built from the same prefix gets a fresh id.
    pub fn allocator(&self) -> Arc<dyn IdAllocator> {
        match self.id_strategy {
            IdStrategy::Sequential => SequentialIds::shared_for(&self.id_prefix),
            IdStrategy::Random => Arc::new(RandomIds::new(self.id_prefix.clone())),
        }
    }

    /// Reject prefixes that would make derived tab and panel ids ambiguous.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.id_prefix.as_str();
        if prefix.is_empty() {
            return Err(CoreError::Config("id_prefix cannot be empty".to_string()));
        }
        if prefix.contains("-tab-") || prefix.contains("-panel-") {
            return Err(CoreError::Config(format!(
                "id_prefix '{}' cannot contain '-tab-' or '-panel-'",
                prefix
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            id_strategy: IdStrategy::Sequential,
            variant: TabVariant::Pill,
            orientation: Orientation::Horizontal,
            default_active_tab: None,
        }
    }
}
