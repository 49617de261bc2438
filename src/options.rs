//! Runtime configuration for a mounted game.
//!
//! `GameOptions::default()` reproduces the stock page: builtin phrases, the
//! standard element ids and uppercase reveals. With the `serde_json` feature
//! the same struct can be read from a JSON string handed over by JS, e.g.
//!
//! ```json
//! { "revealCase": "asWritten", "categories": [{ "name": "Pets", "phrases": ["Cat"] }] }
//! ```

use crate::error::ConfigurationError;
use crate::phrases::{Catalog, Category};

/// How a revealed letter is displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(rename_all = "camelCase"))]
pub enum RevealCase {
    /// Always uppercase, regardless of how the phrase was authored.
    #[default]
    Upper,
    /// Exactly as authored in the catalog.
    AsWritten,
}

impl RevealCase {
    pub fn apply(self, c: char) -> char {
        match self {
            RevealCase::Upper => c.to_ascii_uppercase(),
            RevealCase::AsWritten => c,
        }
    }
}

/// DOM ids of the surfaces the game renders into. Missing elements are created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct ElementIds {
    pub canvas: String,
    pub word_display: String,
    pub category: String,
    pub letters: String,
    pub status: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            canvas: "hangman-canvas".into(),
            word_display: "word-display".into(),
            category: "category".into(),
            letters: "letters-container".into(),
            status: "game-status".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct GameOptions {
    pub elements: ElementIds,
    pub reveal_case: RevealCase,
    /// Replaces the builtin phrase table when present.
    pub categories: Option<Vec<Category>>,
}

impl GameOptions {
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(json).map_err(|e| ConfigurationError::InvalidOptions(e.to_string()))
    }

    /// Validated catalog for these options.
    pub fn catalog(&self) -> Result<Catalog, ConfigurationError> {
        match &self.categories {
            Some(categories) => Catalog::new(categories.clone()),
            None => Catalog::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_builtin_catalog() {
        let opts = GameOptions::default();
        assert_eq!(opts.reveal_case, RevealCase::Upper);
        assert_eq!(opts.elements.canvas, "hangman-canvas");
        assert_eq!(opts.catalog().unwrap().categories().len(), 4);
    }

    #[test]
    fn custom_catalog_is_validated() {
        let opts = GameOptions {
            categories: Some(vec![]),
            ..GameOptions::default()
        };
        assert_eq!(opts.catalog().unwrap_err(), ConfigurationError::EmptyCatalog);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn parses_partial_json() {
        let opts = GameOptions::from_json(
            r#"{ "revealCase": "asWritten",
                 "elements": { "canvas": "gallows" },
                 "categories": [{ "name": "Pets", "phrases": ["Cat", "Dog"] }] }"#,
        )
        .unwrap();
        assert_eq!(opts.reveal_case, RevealCase::AsWritten);
        assert_eq!(opts.elements.canvas, "gallows");
        assert_eq!(opts.elements.status, "game-status");
        let catalog = opts.catalog().unwrap();
        assert_eq!(catalog.categories()[0].phrases, vec!["Cat", "Dog"]);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(GameOptions::from_json("{}").unwrap(), GameOptions::default());
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_a_configuration_error() {
        let err = GameOptions::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidOptions(_)));
    }
}
