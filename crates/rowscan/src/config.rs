use rowscan_core::CacheMode;

use serde::{Deserialize, Serialize};

/// Settings for an [`Api`](crate::Api).
///
/// Every field has a default, so a partial document deserializes:
///
/// ```
/// let config: rowscan::Config = serde_json::from_str(r#"{ "cache_mode": "locked" }"#).unwrap();
/// assert_eq!(config.cache_mode, rowscan::CacheMode::Locked);
/// assert_eq!(config.column_separator, ".");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How resolved column maps are memoized.
    pub cache_mode: CacheMode,

    /// Drop values of columns with no destination field instead of failing.
    pub allow_unknown_columns: bool,

    /// Placed between a nested record's prefix and its column names.
    pub column_separator: String,

    /// Fail when two fields of a record resolve to the same column.
    pub strict_columns: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cache_mode: CacheMode::default(),
            allow_unknown_columns: false,
            column_separator: ".".to_string(),
            strict_columns: false,
        }
    }
}
