//! JSON file settings store.
//!
//! One flat JSON object per store file; each key is replaced wholesale on
//! write. There is no cross-key atomicity.

use speclens_rules::RuleSet;
use speclens_scanner::ScanReport;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const KEY_RULES: &str = "specRules";
pub const KEY_ENABLED: &str = "isEnabled";
pub const KEY_SCAN_RESULTS: &str = "scanResults";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contains invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persistent settings, keyed the way the host extension storage is.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Open a store file, seeding it on first run with the default rules
    /// and the engine disarmed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };

        if !store.path.exists() {
            tracing::info!(path = %store.path.display(), "seeding settings store");
            let mut map = serde_json::Map::new();
            map.insert(
                KEY_RULES.to_string(),
                serde_json::to_value(RuleSet::default_rules())?,
            );
            map.insert(KEY_ENABLED.to_string(), serde_json::Value::Bool(false));
            store.write_map(&map)?;
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<serde_json::Map<String, serde_json::Value>, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_map(
        &self,
        map: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(map)?)?;
        Ok(())
    }

    fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let map = self.read_map()?;
        match map.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn set<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_map(&map)
    }

    /// The stored rules, falling back to the defaults when absent.
    pub fn rules(&self) -> Result<RuleSet, StoreError> {
        Ok(self
            .get::<RuleSet>(KEY_RULES)?
            .unwrap_or_else(RuleSet::default_rules))
    }

    pub fn set_rules(&self, rules: &RuleSet) -> Result<(), StoreError> {
        self.set(KEY_RULES, rules)
    }

    pub fn enabled(&self) -> Result<bool, StoreError> {
        Ok(self.get::<bool>(KEY_ENABLED)?.unwrap_or(false))
    }

    pub fn set_enabled(&self, enabled: bool) -> Result<(), StoreError> {
        self.set(KEY_ENABLED, &enabled)
    }

    pub fn scan_results(&self) -> Result<Option<ScanReport>, StoreError> {
        self.get(KEY_SCAN_RESULTS)
    }

    /// Replace the stored report wholesale.
    pub fn set_scan_results(&self, report: &ScanReport) -> Result<(), StoreError> {
        self.set(KEY_SCAN_RESULTS, report)
    }
}
