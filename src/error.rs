use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fatal startup errors: the game cannot start without a valid phrase catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("phrase catalog has no categories")]
    EmptyCatalog,

    #[error("category name must not be blank")]
    BlankCategoryName,

    #[error("category {category:?} has no phrases")]
    EmptyCategory { category: String },

    #[error("category {category:?} contains a blank phrase")]
    BlankPhrase { category: String },

    #[error("phrase {phrase:?} in category {category:?} uses {ch:?}, which has no key")]
    UnguessableCharacter {
        category: String,
        phrase: String,
        ch: char,
    },

    #[error("invalid game options: {0}")]
    InvalidOptions(String),
}

impl From<ConfigurationError> for JsValue {
    fn from(err: ConfigurationError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
