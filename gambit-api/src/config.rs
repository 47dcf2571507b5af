//! Configuration lookup consumed by the table-name resolution.
//!
//! The configuration is a plain key-value store whose keys have the form
//! `"<namespace>.<key>"`. Physical table names live under the [`TABLE_NAMESPACE`] namespace.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Namespace holding the logical to physical table name mappings.
pub const TABLE_NAMESPACE: &str = "gambitTable";

/// The result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// An enum representing possible errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON or does not have the expected shape.
    #[error("Invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A read-only key-value configuration store.
pub trait ConfigStore {
    /// Gets the value for the given `"<namespace>.<key>"` key, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl<C> ConfigStore for &C
where
    C: ConfigStore + ?Sized,
{
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// In-memory [`ConfigStore`] grouping entries by namespace.
///
/// It deserializes from a document such as:
///
/// ```json
/// { "gambitTable": { "Users": "tbl_users", "Orders": "tbl_orders" } }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableConfig {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl TableConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the configuration from a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        serde_json::from_str(json).map_err(ConfigError::from)
    }

    /// Loads the configuration from an already parsed JSON value.
    pub fn from_json_value(value: serde_json::Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(ConfigError::from)
    }

    /// Maps a logical table identifier to its physical name in the [`TABLE_NAMESPACE`] namespace.
    pub fn with_table(mut self, logical: impl Into<String>, physical: impl Into<String>) -> Self {
        self.insert(TABLE_NAMESPACE, logical, physical);
        self
    }

    /// Inserts a value under `namespace`, replacing any previous value for the same key.
    pub fn insert(
        &mut self,
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.namespaces
            .entry(namespace.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Returns whether the configuration holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.namespaces.values().all(HashMap::is_empty)
    }
}

impl ConfigStore for TableConfig {
    fn get(&self, key: &str) -> Option<String> {
        let (namespace, key) = key.split_once('.')?;
        self.namespaces.get(namespace)?.get(key).cloned()
    }
}
