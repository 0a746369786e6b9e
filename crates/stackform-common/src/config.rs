//! Deploy-time parameter overrides.
//!
//! An override file maps parameter names to values; composition binds each
//! value over the declaration default in every scope that declares the
//! name. Overrides never introduce parameters.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StackformError};

/// Parameter values supplied at composition time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterOverrides {
    values: BTreeMap<String, String>,
}

impl ParameterOverrides {
    /// Creates an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads overrides from a YAML file mapping names to values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a flat
    /// string-to-string mapping.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StackformError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parses overrides from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a flat string-to-string
    /// mapping.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| StackformError::Config {
            message: format!("invalid parameter override file: {e}"),
        })
    }

    /// Adds or replaces an override.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let _ = self.values.insert(name.into(), value.into());
    }

    /// Returns the override for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns true when no overrides are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the overrides in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_overrides_resolve_nothing() {
        let overrides = ParameterOverrides::new();
        assert!(overrides.is_empty());
        assert_eq!(overrides.get("DynamoDBTableName"), None);
    }

    #[test]
    fn yaml_mapping_parses() {
        let overrides = ParameterOverrides::from_yaml_str(
            "DynamoDBTableName: tareas-prod\nEnvironmentName: prod\n",
        )
        .expect("should parse");
        assert_eq!(overrides.get("DynamoDBTableName"), Some("tareas-prod"));
        assert_eq!(overrides.get("EnvironmentName"), Some("prod"));
    }

    #[test]
    fn non_mapping_yaml_is_rejected() {
        let err = ParameterOverrides::from_yaml_str("- just\n- a\n- list\n").unwrap_err();
        assert!(err.to_string().contains("invalid parameter override file"));
    }

    #[test]
    fn override_file_round_trips_through_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "APIName: TareasAPI").expect("write");
        let overrides = ParameterOverrides::from_yaml_file(file.path()).expect("load");
        assert_eq!(overrides.get("APIName"), Some("TareasAPI"));
    }

    #[test]
    fn missing_file_reports_io_error_with_path() {
        let err =
            ParameterOverrides::from_yaml_file(Path::new("/nonexistent/params.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/params.yaml"));
    }
}
