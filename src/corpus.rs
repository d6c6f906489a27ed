//! Recipe data model.
//!
//! A [`Recipe`] is an unordered collection of ingredient-name strings.
//! Ingredient strings are opaque, pre-canonicalized tokens: case folding,
//! pluralization, and spelling normalization are the corpus loader's job,
//! not this crate's. Duplicate names within one recipe collapse to a single
//! entry (set semantics — order and multiplicity carry no meaning).
//!
//! # Examples
//!
//! ```
//! use maridaje::corpus::Recipe;
//!
//! let recipe = Recipe::from_ingredients(["salt", "pepper", "salt"]);
//! assert_eq!(recipe.len(), 2);
//! assert!(recipe.contains("salt"));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One dish: a set of ingredient names.
///
/// Immutable once built; the analysis pipeline only ever reads recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    ingredients: BTreeSet<String>,
}

impl Recipe {
    /// Create an empty recipe.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ingredients: BTreeSet::new(),
        }
    }

    /// Create a recipe from any collection of ingredient names.
    ///
    /// Duplicates collapse; an ingredient listed twice counts once.
    #[must_use]
    pub fn from_ingredients<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the recipe contains the named ingredient.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.contains(name)
    }

    /// Number of distinct ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// Whether the recipe has no ingredients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Iterate over ingredient names in lexicographic order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Into<String>> FromIterator<S> for Recipe {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_ingredients(iter)
    }
}
