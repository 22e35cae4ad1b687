//! Table configuration loading and validation

use crate::core::{ConfigError, FieldKind};
use crate::core::query::DEFAULT_PAGE_SIZE;
use crate::table::export::Escaping;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Configuration for a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Header shown in the UI and written as the export header
    pub header: String,

    /// Declared value type, drives sort coercion
    #[serde(default)]
    pub kind: FieldKind,

    /// Whether the column is written by CSV export
    #[serde(default = "default_true")]
    pub export: bool,
}

impl ColumnConfig {
    pub fn new(header: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            header: header.into(),
            kind,
            export: true,
        }
    }

    /// Same column, left out of exports
    pub fn display_only(mut self) -> Self {
        self.export = false;
        self
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub escaping: Escaping,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            content_type: default_content_type(),
            delimiter: default_delimiter(),
            escaping: Escaping::default(),
        }
    }
}

/// Complete configuration for one table
///
/// Columns keep their declaration order, which is also the export order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name, used in logs
    pub name: String,

    /// Initial number of rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Page sizes offered to the user
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,

    /// Column definitions keyed by record field name
    #[serde(default)]
    pub columns: IndexMap<String, ColumnConfig>,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20]
}

fn default_file_name() -> String {
    "campaigns.csv".to_string()
}

fn default_content_type() -> String {
    "text/csv".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

impl TableConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;

        tracing::debug!(table = %config.name, path, "loaded table configuration");
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// A configuration without columns
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            columns: IndexMap::new(),
            export: ExportConfig::default(),
        }
    }

    /// Reject settings the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size".to_string(),
                value: "0".to_string(),
                message: "page size must be at least 1".to_string(),
            });
        }

        if self.page_size_options.contains(&0) {
            return Err(ConfigError::InvalidValue {
                field: "page_size_options".to_string(),
                value: format!("{:?}", self.page_size_options),
                message: "page size options must be at least 1".to_string(),
            });
        }

        if self.export.delimiter.is_empty() || self.export.delimiter.contains('\n') {
            return Err(ConfigError::InvalidValue {
                field: "export.delimiter".to_string(),
                value: self.export.delimiter.clone(),
                message: "delimiter must be non-empty and single-line".to_string(),
            });
        }

        Ok(())
    }

    /// Column definition for a record field
    pub fn column(&self, key: &str) -> Option<&ColumnConfig> {
        self.columns.get(key)
    }

    /// Declared kind for a record field
    pub fn kind_of(&self, key: &str) -> Option<FieldKind> {
        self.columns.get(key).map(|c| c.kind)
    }

    /// Exported columns in declaration order, as `(field, column)` pairs
    pub fn export_columns(&self) -> impl Iterator<Item = (&str, &ColumnConfig)> {
        self.columns
            .iter()
            .filter(|(_, c)| c.export)
            .map(|(k, c)| (k.as_str(), c))
    }

    /// Configuration of the campaign performance table
    pub fn default_config() -> Self {
        let mut columns = IndexMap::new();
        columns.insert("name".to_string(), ColumnConfig::new("Campaign", FieldKind::Text));
        columns.insert("status".to_string(), ColumnConfig::new("Status", FieldKind::Text));
        columns.insert("budget".to_string(), ColumnConfig::new("Budget", FieldKind::Number));
        columns.insert("spent".to_string(), ColumnConfig::new("Spent", FieldKind::Number));
        columns.insert(
            "conversions".to_string(),
            ColumnConfig::new("Conversions", FieldKind::Number),
        );
        columns.insert("roas".to_string(), ColumnConfig::new("ROI", FieldKind::Number));
        columns.insert(
            "start_date".to_string(),
            ColumnConfig::new("Start Date", FieldKind::Date),
        );
        columns.insert(
            "end_date".to_string(),
            ColumnConfig::new("End Date", FieldKind::Date).display_only(),
        );

        Self {
            name: "campaigns".to_string(),
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            columns,
            export: ExportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default_config();

        assert_eq!(config.columns.len(), 8);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.export_columns().count(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = TableConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = TableConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
        let keys: Vec<&String> = parsed.columns.keys().collect();
        assert_eq!(keys[0], "name");
        assert_eq!(keys[6], "start_date");
    }

    #[test]
    fn test_minimal_yaml_uses_defaults() {
        let config = TableConfig::from_yaml_str("name: reports\n").unwrap();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 10, 20]);
        assert!(config.columns.is_empty());
        assert_eq!(config.export.delimiter, ",");
        assert_eq!(config.export.escaping, Escaping::None);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = TableConfig::from_yaml_str("name: t\npage_size: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "page_size"));
    }

    #[test]
    fn test_zero_page_size_option_rejected() {
        let err =
            TableConfig::from_yaml_str("name: t\npage_size_options: [5, 0]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let yaml = "name: t\nexport:\n  delimiter: \"\"\n";
        assert!(TableConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = TableConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
