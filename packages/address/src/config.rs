//! TOML lexicon overlays.
//!
//! An overlay adds entries to the built-in tables without replacing them:
//!
//! ```toml
//! confusing_cities = ["Lake Wales", "Cape Canaveral"]
//!
//! [street_types]
//! CORSO = "CRSO"
//!
//! [designators]
//! WING = "WNG"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::LexiconError;

/// Additional lexicon entries loaded from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexiconOverlay {
    /// Multi-word city names to keep whole during parsing.
    #[serde(default)]
    pub confusing_cities: Vec<String>,
    /// Street suffix spelling → abbreviation.
    #[serde(default)]
    pub street_types: BTreeMap<String, String>,
    /// Secondary designator spelling → abbreviation.
    #[serde(default)]
    pub designators: BTreeMap<String, String>,
}

impl LexiconOverlay {
    /// Parses an overlay from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Toml`] if the text is not a valid overlay.
    pub fn from_toml_str(content: &str) -> Result<Self, LexiconError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses an overlay file.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the file cannot be read, or
    /// [`LexiconError::Toml`] if it is not a valid overlay.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        log::debug!("Loading lexicon overlay from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_overlay() {
        let overlay = LexiconOverlay::from_toml_str(
            r#"
confusing_cities = ["Lake Wales", "Cape Canaveral"]

[street_types]
CORSO = "CRSO"

[designators]
WING = "WNG"
"#,
        )
        .unwrap();

        assert_eq!(overlay.confusing_cities, vec!["Lake Wales", "Cape Canaveral"]);
        assert_eq!(
            overlay.street_types.get("CORSO").map(String::as_str),
            Some("CRSO")
        );
        assert_eq!(
            overlay.designators.get("WING").map(String::as_str),
            Some("WNG")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let overlay = LexiconOverlay::from_toml_str("confusing_cities = [\"Lake Wales\"]").unwrap();
        assert!(overlay.street_types.is_empty());
        assert!(overlay.designators.is_empty());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            LexiconOverlay::from_toml_str("confusing_cities = 5"),
            Err(LexiconError::Toml(_))
        ));
    }

    #[test]
    fn reports_missing_file() {
        assert!(matches!(
            LexiconOverlay::load("/nonexistent/overlay.toml"),
            Err(LexiconError::Io(_))
        ));
    }
}
