//! Phrase catalog and random selection.
//!
//! Selection is two-stage uniform: a category is drawn uniformly, then a phrase
//! uniformly within it. Phrases in small categories are therefore drawn more
//! often than phrases in large ones.

use rand::Rng;

use crate::error::ConfigurationError;
use crate::game::keyboard;

// -----------------------------------------------------------------------------
// Builtin phrase table
// -----------------------------------------------------------------------------

pub const PHRASES: &[(&str, &[&str])] = &[
    (
        "Movies",
        &[
            "The Shawshank Redemption", "The Godfather", "Pulp Fiction", "The Dark Knight",
            "The Matrix", "Star Wars", "Jurassic Park", "The Lion King", "Avatar",
            "Back to the Future", "Indiana Jones", "Fight Club", "The Terminator",
        ],
    ),
    (
        "TV Shows",
        &[
            "Breaking Bad", "Game of Thrones", "Friends", "The Office", "Stranger Things",
            "The Walking Dead", "The Crown", "Westworld", "Black Mirror", "The Mandalorian",
        ],
    ),
    (
        "Book Titles",
        &[
            "To Kill a Mockingbird", "Pride and Prejudice", "The Great Gatsby",
            "The Hobbit", "The Catcher in the Rye", "Lord of the Flies",
        ],
    ),
    (
        "Famous Quotes",
        &[
            "To be or not to be", "I have a dream", "Life is like a box of chocolates",
            "May the force be with you", "Here's looking at you kid", "I'll be back",
        ],
    ),
];

// -----------------------------------------------------------------------------
// Catalog
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct Category {
    pub name: String,
    pub phrases: Vec<String>,
}

/// One provider draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub category: String,
    pub phrase: String,
}

/// Validated, immutable set of categories. Construction fails fast on any
/// catalog that could leave the game without a winnable phrase.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Result<Self, ConfigurationError> {
        if categories.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }
        for cat in &categories {
            validate_category(cat)?;
        }
        Ok(Self { categories })
    }

    /// Catalog built from [`PHRASES`].
    pub fn builtin() -> Result<Self, ConfigurationError> {
        Self::from_table(PHRASES)
    }

    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, ConfigurationError> {
        let categories = table
            .iter()
            .map(|(name, phrases)| Category {
                name: (*name).to_string(),
                phrases: phrases.iter().map(|p| (*p).to_string()).collect(),
            })
            .collect();
        Self::new(categories)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Draw a category uniformly, then a phrase uniformly within it.
    pub fn select_random_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> Selection {
        // Both ranges are non-empty: `new` rejects empty catalogs and categories.
        let cat = &self.categories[rng.gen_range(0..self.categories.len())];
        let phrase = &cat.phrases[rng.gen_range(0..cat.phrases.len())];
        Selection {
            category: cat.name.clone(),
            phrase: phrase.clone(),
        }
    }
}

fn validate_category(cat: &Category) -> Result<(), ConfigurationError> {
    if cat.name.trim().is_empty() {
        return Err(ConfigurationError::BlankCategoryName);
    }
    if cat.phrases.is_empty() {
        return Err(ConfigurationError::EmptyCategory {
            category: cat.name.clone(),
        });
    }
    for phrase in &cat.phrases {
        if phrase.trim().is_empty() {
            return Err(ConfigurationError::BlankPhrase {
                category: cat.name.clone(),
            });
        }
        if let Some(ch) = phrase
            .chars()
            .filter(|c| !c.is_whitespace())
            .find(|c| keyboard::normalize(*c).is_none())
        {
            return Err(ConfigurationError::UnguessableCharacter {
                category: cat.name.clone(),
                phrase: phrase.clone(),
                ch,
            });
        }
    }
    Ok(())
}
