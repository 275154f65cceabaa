use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snipkit_model::{FieldName, Record, SortOrder};
use tracing::debug;

use crate::error::Result;
use crate::sorting::{self, MixedKeyPolicy};

/// Top-level knobs for the utilities that have any.
///
/// All fields carry defaults so a config file only needs to name what it
/// changes; an empty file is a valid config.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnipkitConfig {
    /// Defaults applied by the keyed sorts.
    pub sorting: SortingConfig,
    /// Default delay for debounced callbacks.
    pub debounce: DebounceConfig,
}

impl SnipkitConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        debug!(path = %path.display(), "loaded snipkit config");
        Ok(config)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Direction used when a call does not pick one.
    pub default_order: SortOrder,
    /// Handling of parsed dates mixed with unparsed text.
    pub mixed_date_keys: MixedKeyPolicy,
}

impl SortingConfig {
    /// [`sort_by_text_key`](sorting::sort_by_text_key) in the configured
    /// default direction.
    pub fn sort_by_text_key<R: Record>(
        &self,
        records: Vec<R>,
        field: impl Into<FieldName>,
    ) -> Vec<R> {
        sorting::sort_by_text_key(records, field, self.default_order)
    }

    /// [`try_sort_by_date_key`](sorting::try_sort_by_date_key) with the
    /// configured direction and mixed-key policy.
    pub fn sort_by_date_key<R: Record>(
        &self,
        records: &mut [R],
        field: impl Into<FieldName>,
    ) -> Result<()> {
        sorting::try_sort_by_date_key(
            records,
            field,
            self.default_order,
            self.mixed_date_keys,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period, in milliseconds, before the last call fires.
    pub delay_ms: u64,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self { delay_ms: 200 }
    }
}

impl DebounceConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
