//! Pager configuration
//!
//! `PagerConfig` holds the knobs of a `PaginationState`: page size and the
//! page sizes a user may pick from, navigation toggling, per-column value
//! types and the sort to apply when data first arrives. It can be built in
//! code or loaded from YAML (JSON works too, being a YAML subset).

use crate::coerce::ValueType;
use crate::error::{Error, Result};
use crate::sort::SortSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default page size
pub const DEFAULT_LIMIT: usize = 10;

/// Default page sizes offered to users
pub const DEFAULT_LIMIT_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Configuration for a pagination state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Records per page
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Page sizes a user may switch between
    #[serde(default = "default_limit_options")]
    pub limit_options: Vec<usize>,

    /// Label shown next to each page size (e.g. "25 rows")
    #[serde(default = "default_limit_label")]
    pub limit_label: String,

    /// Compute and render the page navigation
    #[serde(default = "default_true")]
    pub use_navigation: bool,

    /// Declared value types per column
    #[serde(default)]
    pub column_types: BTreeMap<String, ValueType>,

    /// Sort applied when results are first loaded
    #[serde(default)]
    pub initial_sort: Option<SortSpec>,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_limit_options() -> Vec<usize> {
    DEFAULT_LIMIT_OPTIONS.to_vec()
}

fn default_limit_label() -> String {
    "rows".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            limit_options: default_limit_options(),
            limit_label: default_limit_label(),
            use_navigation: true,
            column_types: BTreeMap::new(),
            initial_sort: None,
        }
    }
}

impl PagerConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Set the page size options
    #[must_use]
    pub fn with_limit_options(mut self, options: Vec<usize>) -> Self {
        self.limit_options = options;
        self
    }

    /// Set the page size label
    #[must_use]
    pub fn with_limit_label(mut self, label: impl Into<String>) -> Self {
        self.limit_label = label.into();
        self
    }

    /// Enable/disable navigation
    #[must_use]
    pub fn with_navigation(mut self, enabled: bool) -> Self {
        self.use_navigation = enabled;
        self
    }

    /// Declare the value type of a column
    #[must_use]
    pub fn with_column_type(mut self, column: impl Into<String>, value_type: ValueType) -> Self {
        self.column_types.insert(column.into(), value_type);
        self
    }

    /// Set the sort applied on first load
    #[must_use]
    pub fn with_initial_sort(mut self, sort: SortSpec) -> Self {
        self.initial_sort = Some(sort);
        self
    }

    /// Check if a page size is one of the options
    pub fn allows_limit(&self, limit: usize) -> bool {
        self.limit_options.contains(&limit)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.limit_options.is_empty() {
            return Err(Error::config("limit_options cannot be empty"));
        }

        if self.limit_options.contains(&0) {
            return Err(Error::config("limit_options cannot contain 0"));
        }

        if !self.allows_limit(self.limit) {
            return Err(Error::invalid_limit(self.limit, &self.limit_options));
        }

        if let Some(sort) = &self.initial_sort {
            if sort.field.is_empty() {
                return Err(Error::config("initial_sort field cannot be empty"));
            }
        }

        Ok(())
    }
}

/// Load a pager configuration from a YAML or JSON file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;
    load_config_from_str(&content)
}

/// Load a pager configuration from a YAML or JSON string
pub fn load_config_from_str(text: &str) -> Result<PagerConfig> {
    let config: PagerConfig = serde_yaml::from_str(text)
        .map_err(|e| Error::config(format!("Failed to parse pager config: {e}")))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortDirection;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::default();
        assert_eq!(config.limit, 10);
        assert_eq!(config.limit_options, vec![10, 25, 50, 100]);
        assert_eq!(config.limit_label, "rows");
        assert!(config.use_navigation);
        assert!(config.column_types.is_empty());
        assert!(config.initial_sort.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml() {
        let yaml = r"
limit: 25
limit_label: items
use_navigation: false
column_types:
  amount: number
  code: string
initial_sort:
  field: created
  direction: desc
";
        let config = load_config_from_str(yaml).unwrap();
        assert_eq!(config.limit, 25);
        assert_eq!(config.limit_options, vec![10, 25, 50, 100]);
        assert_eq!(config.limit_label, "items");
        assert!(!config.use_navigation);
        assert_eq!(config.column_types.get("amount"), Some(&ValueType::Number));
        assert_eq!(config.column_types.get("code"), Some(&ValueType::String));
        assert_eq!(
            config.initial_sort,
            Some(SortSpec::new("created", SortDirection::Desc))
        );
    }

    #[test]
    fn test_load_from_json() {
        let config = load_config_from_str(r#"{"limit": 5, "limit_options": [5, 15]}"#).unwrap();
        assert_eq!(config.limit, 5);
        assert_eq!(config.limit_options, vec![5, 15]);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_limit_must_be_an_option() {
        let err = load_config_from_str("limit: 7").unwrap_err();
        assert!(matches!(err, Error::InvalidLimit { limit: 7, .. }));
    }

    #[test]
    fn test_invalid_options() {
        let err = PagerConfig::new().with_limit_options(vec![]).validate();
        assert!(err.is_err());

        let err = PagerConfig::new()
            .with_limit(0)
            .with_limit_options(vec![0, 10])
            .validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = load_config_from_str("limit: [unclosed").unwrap_err();
        assert!(err.to_string().contains("Failed to parse pager config"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "limit: 50").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.limit, 50);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/nonexistent/pager.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
