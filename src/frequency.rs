//! Frequency counting and the minimum-frequency ingredient filter.
//!
//! The first two stages of the pipeline: [`FrequencyMap`] counts how many
//! recipes contain each ingredient, and [`FrequencyMap::select_common`]
//! keeps the ingredients common enough to analyze. The cutoff is the main
//! lever over downstream combinatorial cost — a higher threshold means a
//! smaller selected set and a cheaper (but coarser) analysis.
//!
//! # Examples
//!
//! ```
//! use maridaje::corpus::Recipe;
//! use maridaje::frequency::FrequencyMap;
//!
//! let recipes = vec![
//!     Recipe::from_ingredients(["salt", "pepper"]),
//!     Recipe::from_ingredients(["salt"]),
//! ];
//! let frequencies = FrequencyMap::from_recipes(&recipes);
//! assert_eq!(frequencies.count("salt"), 2);
//! assert_eq!(frequencies.count("pepper"), 1);
//!
//! let selected = frequencies.select_common(2);
//! assert!(selected.contains("salt"));
//! assert!(!selected.contains("pepper"));
//! ```

use crate::corpus::Recipe;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-ingredient recipe counts over one corpus.
///
/// The count for an ingredient is the number of recipes containing it; a
/// recipe listing an ingredient twice still counts once. Built once per
/// corpus and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyMap {
    counts: BTreeMap<String, usize>,
}

impl FrequencyMap {
    /// Count ingredient frequencies over a recipe corpus.
    ///
    /// Empty input yields an empty map. O(total ingredient occurrences).
    #[must_use]
    pub fn from_recipes(recipes: &[Recipe]) -> Self {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for recipe in recipes {
            for name in recipe.ingredients() {
                *counts.entry(name.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Number of recipes containing the ingredient (0 if never seen).
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Number of distinct ingredients seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no ingredient was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(ingredient, count)` in lexicographic ingredient order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    /// Ingredients ordered by recipe count descending, names ascending on
    /// ties.
    ///
    /// Presentation-ready ordering for "most common ingredients" tables.
    #[must_use]
    pub fn by_count_descending(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// Select every ingredient whose count is at least `threshold` (inclusive).
    ///
    /// `threshold == 0` selects every ingredient that appears at all.
    /// Selection size is monotonically non-increasing in the threshold.
    #[must_use]
    pub fn select_common(&self, threshold: usize) -> SelectedSet {
        let names = self
            .counts
            .iter()
            .filter(|&(_, &count)| count >= threshold)
            .map(|(name, _)| name.clone())
            .collect();
        SelectedSet { names }
    }

    /// Empirical CDF of per-ingredient recipe counts.
    ///
    /// Returns `(count, fraction of ingredients with count <= count)` pairs,
    /// ascending by count. This is presentation-ready data for a plotting
    /// collaborator (typically drawn with a logarithmic count axis); no
    /// rendering happens here.
    #[must_use]
    pub fn cumulative_distribution(&self) -> Vec<(usize, f64)> {
        if self.counts.is_empty() {
            return Vec::new();
        }
        let mut values: Vec<usize> = self.counts.values().copied().collect();
        values.sort_unstable();
        let total = values.len() as f64;

        let mut points: Vec<(usize, f64)> = Vec::new();
        for (rank, value) in values.iter().enumerate() {
            let fraction = (rank + 1) as f64 / total;
            match points.last_mut() {
                Some(last) if last.0 == *value => last.1 = fraction,
                _ => points.push((*value, fraction)),
            }
        }
        points
    }
}

/// The set of ingredients retained for analysis after the frequency cutoff.
///
/// Every member's [`FrequencyMap`] count is at least the threshold it was
/// selected with. Iteration is lexicographic, the crate-wide determinism key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedSet {
    names: BTreeSet<String>,
}

impl SelectedSet {
    /// Whether the ingredient passed the cutoff.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of selected ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether nothing passed the cutoff.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over selected names in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipes() -> Vec<Recipe> {
        vec![
            Recipe::from_ingredients(["salt", "pepper", "onion"]),
            Recipe::from_ingredients(["salt", "onion"]),
            Recipe::from_ingredients(["salt", "pepper"]),
            Recipe::from_ingredients(["pepper"]),
        ]
    }

    #[test]
    fn test_counts_from_corpus() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        assert_eq!(frequencies.count("salt"), 3);
        assert_eq!(frequencies.count("pepper"), 3);
        assert_eq!(frequencies.count("onion"), 2);
        assert_eq!(frequencies.count("saffron"), 0);
        assert_eq!(frequencies.len(), 3);
    }

    #[test]
    fn test_duplicate_in_one_recipe_counts_once() {
        let recipes = vec![Recipe::from_ingredients(["salt", "salt"])];
        let frequencies = FrequencyMap::from_recipes(&recipes);
        assert_eq!(frequencies.count("salt"), 1);
    }

    #[test]
    fn test_empty_corpus() {
        let frequencies = FrequencyMap::from_recipes(&[]);
        assert!(frequencies.is_empty());
        assert!(frequencies.select_common(0).is_empty());
        assert!(frequencies.cumulative_distribution().is_empty());
    }

    #[test]
    fn test_total_count_at_least_recipe_count() {
        let recipes = sample_recipes();
        let frequencies = FrequencyMap::from_recipes(&recipes);
        let total: usize = frequencies.iter().map(|(_, count)| count).sum();
        assert!(total >= recipes.len());
    }

    #[test]
    fn test_by_count_descending() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let ordered = frequencies.by_count_descending();
        // pepper and salt tie at 3; the tie breaks by name.
        assert_eq!(ordered, vec![("pepper", 3), ("salt", 3), ("onion", 2)]);
    }

    #[test]
    fn test_by_count_descending_empty() {
        let frequencies = FrequencyMap::from_recipes(&[]);
        assert!(frequencies.by_count_descending().is_empty());
    }

    #[test]
    fn test_select_common_inclusive_threshold() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let selected = frequencies.select_common(2);
        assert_eq!(selected.len(), 3);
        assert!(selected.contains("onion"));

        let selected = frequencies.select_common(3);
        assert_eq!(selected.len(), 2);
        assert!(!selected.contains("onion"));
    }

    #[test]
    fn test_select_common_zero_threshold_selects_all() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        assert_eq!(frequencies.select_common(0).len(), frequencies.len());
    }

    #[test]
    fn test_select_common_monotone_in_threshold() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let mut previous = usize::MAX;
        for threshold in 0..6 {
            let size = frequencies.select_common(threshold).len();
            assert!(size <= previous);
            previous = size;
        }
    }

    #[test]
    fn test_selected_set_sorted_iteration() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let selected = frequencies.select_common(2);
        let names: Vec<&str> = selected.iter().collect();
        assert_eq!(names, vec!["onion", "pepper", "salt"]);
    }

    #[test]
    fn test_cumulative_distribution() {
        // Counts: salt 3, pepper 3, onion 2 -> values [2, 3, 3]
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let cdf = frequencies.cumulative_distribution();
        assert_eq!(cdf.len(), 2);
        assert_eq!(cdf[0].0, 2);
        assert!((cdf[0].1 - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(cdf[1].0, 3);
        assert!((cdf[1].1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cumulative_distribution_reaches_one() {
        let frequencies = FrequencyMap::from_recipes(&sample_recipes());
        let cdf = frequencies.cumulative_distribution();
        let last = cdf.last().expect("non-empty corpus has a CDF");
        assert!((last.1 - 1.0).abs() < 1e-12);
    }
}
