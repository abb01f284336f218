use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Where records come from: an http(s) URL or a local JSON file
    #[serde(default)]
    pub source: Option<String>,
    /// Grid title shown above the table
    #[serde(default = "default_title")]
    pub title: String,
    /// Displayed (and sortable) columns; derived from the data when empty
    #[serde(default)]
    pub columns: Vec<String>,
    /// Columns the free-text search runs against
    #[serde(default)]
    pub search_columns: Vec<String>,
    #[serde(default = "default_category_field")]
    pub category_field: String,
    /// Column rendered as a price
    #[serde(default = "default_price_column")]
    pub price_column: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_price_decimals")]
    pub price_decimals: usize,
    /// Show "Call for pricing" instead of an empty price cell
    #[serde(default)]
    pub call_for_pricing: bool,
    /// Preference-store scope, so grids on one machine don't collide
    #[serde(default = "default_pref_scope")]
    pub pref_scope: String,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    /// Sort column used until the user picks one; first column when absent
    #[serde(default)]
    pub default_sort_column: Option<String>,
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_title() -> String {
    "Catalog".to_string()
}

fn default_category_field() -> String {
    "category".to_string()
}

fn default_price_column() -> String {
    "price".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_price_decimals() -> usize {
    2
}

fn default_pref_scope() -> String {
    "catalog".to_string()
}

fn default_page_size() -> usize {
    25
}

fn default_page_size_options() -> Vec<usize> {
    vec![10, 25, 50, 100]
}

fn default_search_debounce_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: None,
            title: default_title(),
            columns: Vec::new(),
            search_columns: Vec::new(),
            category_field: default_category_field(),
            price_column: default_price_column(),
            currency: default_currency(),
            price_decimals: default_price_decimals(),
            call_for_pricing: false,
            pref_scope: default_pref_scope(),
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            default_sort_column: None,
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl Config {
    /// Load configuration. An explicit path must exist; the platform default
    /// path is optional and falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("gridtui").join("config.yaml")
        } else {
            PathBuf::from("gridtui.yaml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_yields_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.category_field, "category");
        assert_eq!(config.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.search_debounce_ms, 100);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config: Config = serde_yaml::from_str(
            "source: products.json\ncolumns: [title, price]\ndefault_page_size: 50\n",
        )
        .unwrap();
        assert_eq!(config.source.as_deref(), Some("products.json"));
        assert_eq!(config.columns, vec!["title", "price"]);
        assert_eq!(config.default_page_size, 50);
        // Untouched fields keep their defaults
        assert_eq!(config.currency, "$");
    }
}
