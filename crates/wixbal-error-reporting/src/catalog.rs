//! Error code catalog and lookup.
//!
//! Maps codes such as `B-1-1` to their metadata. The catalog is embedded
//! from `error_catalog.json` at compile time.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metadata for an error code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorCodeInfo {
    /// Subsystem name (e.g., "structure", "value")
    pub subsystem: String,

    /// Short title for the error
    pub title: String,

    /// Default message template; `{name}` placeholders are filled by the caller
    pub message_template: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,

    /// When this error was introduced (version)
    pub since_version: String,
}

/// Global error catalog, parsed lazily from the embedded JSON.
///
/// # Panics
///
/// Panics on first access if the embedded JSON is invalid; the catalog
/// tests catch that before release.
pub static ERROR_CATALOG: Lazy<HashMap<String, ErrorCodeInfo>> = Lazy::new(|| {
    let json_data = include_str!("../error_catalog.json");
    serde_json::from_str(json_data).expect("error_catalog.json is not a valid catalog")
});

/// Look up error code information.
///
/// ```
/// use wixbal_error_reporting::catalog::get_error_info;
///
/// let info = get_error_info("B-1-1").unwrap();
/// assert_eq!(info.title, "Unexpected element");
/// ```
pub fn get_error_info(code: &str) -> Option<&ErrorCodeInfo> {
    ERROR_CATALOG.get(code)
}

pub fn get_docs_url(code: &str) -> Option<&str> {
    ERROR_CATALOG
        .get(code)
        .and_then(|info| info.docs_url.as_deref())
}

pub fn get_subsystem(code: &str) -> Option<&str> {
    ERROR_CATALOG.get(code).map(|info| info.subsystem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        assert!(!ERROR_CATALOG.is_empty());
    }

    #[test]
    fn test_every_code_is_well_formed() {
        for (code, info) in ERROR_CATALOG.iter() {
            let parts: Vec<&str> = code.split('-').collect();
            assert_eq!(parts.len(), 3, "malformed code {code}");
            assert!(parts[0] == "B" || parts[0] == "X", "unknown prefix in {code}");
            assert!(parts[1].parse::<u32>().is_ok(), "bad class in {code}");
            assert!(parts[2].parse::<u32>().is_ok(), "bad number in {code}");
            assert!(!info.title.is_empty());
            assert!(!info.message_template.is_empty());
        }
    }

    #[test]
    fn test_subsystems() {
        assert_eq!(get_subsystem("B-1-2"), Some("structure"));
        assert_eq!(get_subsystem("B-2-4"), Some("required"));
        assert_eq!(get_subsystem("B-3-2"), Some("value"));
        assert_eq!(get_subsystem("B-4-1"), Some("exclusion"));
        assert_eq!(get_subsystem("B-5-1"), Some("extension"));
        assert_eq!(get_subsystem("X-9-1"), Some("markup"));
    }

    #[test]
    fn test_every_docs_url_has_a_page() {
        let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
        for (code, info) in ERROR_CATALOG.iter() {
            let url = info
                .docs_url
                .as_deref()
                .unwrap_or_else(|| panic!("{code} has no docs_url"));
            assert_eq!(url, format!("docs/errors/{code}.md"));
            assert!(root.join(url).is_file(), "missing page {url}");
        }
    }

    #[test]
    fn test_nonexistent_code() {
        assert!(get_error_info("B-999-999").is_none());
        assert!(get_docs_url("B-999-999").is_none());
    }
}
