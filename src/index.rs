//! Co-occurrence index: the central structure all scoring operates on.
//!
//! For every selected ingredient, the index holds its "co-recipes": one set
//! per real recipe containing it, listing the *other* selected ingredients
//! that appeared alongside it. Recipes in which an ingredient co-occurs with
//! no other selected ingredient contribute nothing for it — this exclusion
//! is the sole guard against zero denominators in downstream ratio
//! computation and must hold for every entry.
//!
//! Keys iterate in lexicographic order, the crate-wide determinism key.
//!
//! # Examples
//!
//! ```
//! use maridaje::corpus::Recipe;
//! use maridaje::frequency::FrequencyMap;
//! use maridaje::index::CoOccurrenceIndex;
//!
//! let recipes = vec![
//!     Recipe::from_ingredients(["salt", "pepper", "onion"]),
//!     Recipe::from_ingredients(["salt", "onion"]),
//!     Recipe::from_ingredients(["salt", "pepper"]),
//!     Recipe::from_ingredients(["pepper"]),
//! ];
//! let selected = FrequencyMap::from_recipes(&recipes).select_common(2);
//! let index = CoOccurrenceIndex::build(&recipes, &selected);
//!
//! // salt appears in three recipes, each with at least one other
//! // selected ingredient; the pepper-only recipe contributes nothing.
//! assert_eq!(index.co_recipes("salt").map(<[_]>::len), Some(3));
//! assert_eq!(index.co_recipes("pepper").map(<[_]>::len), Some(2));
//! ```

use crate::corpus::Recipe;
use crate::error::{MaridajeError, Result};
use crate::frequency::SelectedSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-ingredient co-recipe lists over one corpus and one selected set.
///
/// Built once and immutable afterward; scoring never reaches back to the
/// raw corpus. An ingredient absent from this index — never selected, or
/// selected but contributing zero co-recipes — is a hard lookup failure
/// for every scoring operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoOccurrenceIndex {
    co_recipes: BTreeMap<String, Vec<BTreeSet<String>>>,
}

impl CoOccurrenceIndex {
    /// Build the index from a corpus restricted to the selected ingredients.
    ///
    /// For each recipe and each selected ingredient `i` in it, the other
    /// selected ingredients of that recipe form one co-recipe for `i`.
    /// An empty co-recipe is dropped: a recipe whose only selected
    /// ingredient is `i` adds no entry at all, so every listed ingredient
    /// has at least one non-empty co-recipe.
    ///
    /// O(Σ |recipe ∩ selected|²) over the corpus.
    #[must_use]
    pub fn build(recipes: &[Recipe], selected: &SelectedSet) -> Self {
        let mut co_recipes: BTreeMap<String, Vec<BTreeSet<String>>> = BTreeMap::new();
        for recipe in recipes {
            for name in recipe.ingredients() {
                if !selected.contains(name) {
                    continue;
                }
                let others: BTreeSet<String> = recipe
                    .ingredients()
                    .filter(|&other| other != name && selected.contains(other))
                    .map(str::to_string)
                    .collect();
                if !others.is_empty() {
                    co_recipes.entry(name.to_string()).or_default().push(others);
                }
            }
        }
        Self { co_recipes }
    }

    /// The co-recipes recorded for an ingredient, if it has any.
    #[must_use]
    pub fn co_recipes(&self, name: &str) -> Option<&[BTreeSet<String>]> {
        self.co_recipes.get(name).map(Vec::as_slice)
    }

    /// Whether the ingredient has an entry.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.co_recipes.contains_key(name)
    }

    /// Iterate over indexed ingredient names in lexicographic order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.co_recipes.keys().map(String::as_str)
    }

    /// Number of indexed ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.co_recipes.len()
    }

    /// Whether no ingredient has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.co_recipes.is_empty()
    }

    /// All co-occurring ingredients of `name`, each with the fraction of
    /// `name`'s co-recipes containing it.
    ///
    /// Sorted by fraction descending, then name ascending.
    ///
    /// # Errors
    ///
    /// [`MaridajeError::IngredientNotIndexed`] if `name` has no entry.
    pub fn pairings_of(&self, name: &str) -> Result<Vec<(String, f64)>> {
        let co_recipes = self
            .co_recipes
            .get(name)
            .ok_or_else(|| MaridajeError::not_indexed(name))?;

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for co_recipe in co_recipes {
            for other in co_recipe {
                *counts.entry(other.as_str()).or_insert(0) += 1;
            }
        }

        let total = co_recipes.len() as f64;
        let mut pairings: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(other, count)| (other.to_string(), count as f64 / total))
            .collect();
        pairings.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .expect("pairing fractions must be valid f64 (not NaN)")
                .then_with(|| a.0.cmp(&b.0))
        });
        Ok(pairings)
    }
}
