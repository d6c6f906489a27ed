//! Directed, reciprocal, and n-way association scoring with memoization.
//!
//! The [`AssociationScorer`] borrows one [`CoOccurrenceIndex`] and owns the
//! cache of directed percentages computed against it. Tying the cache to a
//! single index makes stale cross-analysis scores unrepresentable: building
//! a new index means constructing a new scorer, and the borrow checker
//! refuses to let an old scorer outlive its index.
//!
//! All percentages are simple ratios in `[0, 1]`. Geometric means propagate
//! hard zeros: one pairwise-disjoint direction drives the whole score to
//! exactly `0.0`.
//!
//! # Examples
//!
//! ```
//! use maridaje::corpus::Recipe;
//! use maridaje::frequency::FrequencyMap;
//! use maridaje::index::CoOccurrenceIndex;
//! use maridaje::score::AssociationScorer;
//!
//! let recipes = vec![
//!     Recipe::from_ingredients(["salt", "pepper", "onion"]),
//!     Recipe::from_ingredients(["salt", "onion"]),
//!     Recipe::from_ingredients(["salt", "pepper"]),
//!     Recipe::from_ingredients(["pepper"]),
//! ];
//! let selected = FrequencyMap::from_recipes(&recipes).select_common(2);
//! let index = CoOccurrenceIndex::build(&recipes, &selected);
//! let mut scorer = AssociationScorer::new(&index);
//!
//! // Directed: 2 of salt's 3 co-recipes contain pepper...
//! let forward = scorer.percent_containing("salt", "pepper").unwrap();
//! assert!((forward - 2.0 / 3.0).abs() < 1e-12);
//! // ...but both of pepper's co-recipes contain salt.
//! let backward = scorer.percent_containing("pepper", "salt").unwrap();
//! assert!((backward - 1.0).abs() < 1e-12);
//! ```

use crate::error::{MaridajeError, Result};
use crate::index::CoOccurrenceIndex;
use std::collections::HashMap;

/// Geometric mean of a sequence of non-negative factors.
///
/// A single `0.0` factor short-circuits the result to exactly `0.0` rather
/// than round-tripping through logarithms; an empty sequence also yields
/// `0.0`.
#[must_use]
pub fn geometric_mean(values: &[f64]) -> f64 {
    if values.is_empty() || values.iter().any(|&v| v == 0.0) {
        return 0.0;
    }
    let log_sum: f64 = values.iter().map(|&v| v.ln()).sum();
    (log_sum / values.len() as f64).exp()
}

/// Association scorer over one co-occurrence index.
///
/// Scoring methods take `&mut self` because the pair cache is the only
/// mutable state in the engine; exclusivity is compile-checked instead of
/// lock-guarded.
#[derive(Debug)]
pub struct AssociationScorer<'a> {
    index: &'a CoOccurrenceIndex,
    cache: HashMap<(String, String), f64>,
    computations: usize,
}

impl<'a> AssociationScorer<'a> {
    /// Create a scorer with an empty cache over the given index.
    #[must_use]
    pub fn new(index: &'a CoOccurrenceIndex) -> Self {
        Self {
            index,
            cache: HashMap::new(),
            computations: 0,
        }
    }

    /// The index this scorer computes against.
    #[must_use]
    pub fn index(&self) -> &CoOccurrenceIndex {
        self.index
    }

    /// Number of cold (uncached) percentage evaluations performed so far.
    ///
    /// A repeated call with the same ordered pair does not bump this.
    #[must_use]
    pub fn computations(&self) -> usize {
        self.computations
    }

    /// Number of ordered pairs currently cached.
    #[must_use]
    pub fn cached_pairs(&self) -> usize {
        self.cache.len()
    }

    /// Fraction of `term1`'s co-recipes that contain `term2`.
    ///
    /// Directed — not symmetric. The denominator is `term1`'s co-recipe
    /// count, which the index builder guarantees is non-zero for every
    /// indexed ingredient. A self-pair is trivial certainty: every recipe
    /// containing an ingredient contains it, so `term1 == term2` scores
    /// `1.0` (co-recipes exclude the key ingredient only as a storage
    /// convention). Results are memoized on the ordered pair; a repeat
    /// call returns the cached value bit-identically.
    ///
    /// # Errors
    ///
    /// [`MaridajeError::IngredientNotIndexed`] if `term1` has no index
    /// entry. `term2` need not be indexed; an unknown `term2` simply
    /// appears in no co-recipe and scores `0.0`.
    pub fn percent_containing(&mut self, term1: &str, term2: &str) -> Result<f64> {
        let key = (term1.to_string(), term2.to_string());
        if let Some(&cached) = self.cache.get(&key) {
            return Ok(cached);
        }

        let co_recipes = self
            .index
            .co_recipes(term1)
            .ok_or_else(|| MaridajeError::not_indexed(term1))?;
        let percentage = if term1 == term2 {
            1.0
        } else {
            let containing = co_recipes
                .iter()
                .filter(|co_recipe| co_recipe.contains(term2))
                .count();
            containing as f64 / co_recipes.len() as f64
        };

        self.cache.insert(key, percentage);
        self.computations += 1;
        Ok(percentage)
    }

    /// Geometric mean of both directions of the pair — symmetric.
    ///
    /// The geometric mean (rather than the arithmetic one) deliberately
    /// sinks pairs whose association is strong in only one direction: one
    /// near-zero factor collapses the score, so high values mean *mutually*
    /// predictive pairs, not merely popular ones.
    ///
    /// # Errors
    ///
    /// [`MaridajeError::IngredientNotIndexed`] if either term has no index
    /// entry.
    pub fn reciprocal_score(&mut self, term1: &str, term2: &str) -> Result<f64> {
        let forward = self.percent_containing(term1, term2)?;
        let backward = self.percent_containing(term2, term1)?;
        Ok(geometric_mean(&[forward, backward]))
    }

    /// Geometric mean of `percent_containing(i, j)` over every ordered pair
    /// `i != j` drawn from `terms`.
    ///
    /// Generalizes [`reciprocal_score`](Self::reciprocal_score) to n >= 2
    /// terms; for n = 2 it reduces to the same value. Any pairwise-disjoint
    /// direction drives the whole score to `0.0`.
    ///
    /// # Errors
    ///
    /// [`MaridajeError::InvalidSubsetSize`] for fewer than two terms;
    /// [`MaridajeError::IngredientNotIndexed`] if any term has no index
    /// entry.
    pub fn n_way_score(&mut self, terms: &[&str]) -> Result<f64> {
        if terms.len() < 2 {
            return Err(MaridajeError::subset_too_small(terms.len()));
        }
        let mut factors = Vec::with_capacity(terms.len() * (terms.len() - 1));
        for &first in terms {
            for &second in terms {
                if first != second {
                    factors.push(self.percent_containing(first, second)?);
                }
            }
        }
        Ok(geometric_mean(&factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Recipe;
    use crate::frequency::FrequencyMap;

    fn sample_index() -> CoOccurrenceIndex {
        let recipes = vec![
            Recipe::from_ingredients(["salt", "pepper", "onion"]),
            Recipe::from_ingredients(["salt", "onion"]),
            Recipe::from_ingredients(["salt", "pepper"]),
            Recipe::from_ingredients(["pepper"]),
        ];
        let selected = FrequencyMap::from_recipes(&recipes).select_common(2);
        CoOccurrenceIndex::build(&recipes, &selected)
    }

    #[test]
    fn test_geometric_mean_basic() {
        assert!((geometric_mean(&[4.0, 1.0]) - 2.0).abs() < 1e-12);
        assert!((geometric_mean(&[0.5, 0.5]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_mean_zero_propagates() {
        assert_eq!(geometric_mean(&[0.8, 0.0, 0.9]), 0.0);
    }

    #[test]
    fn test_geometric_mean_empty_is_zero() {
        assert_eq!(geometric_mean(&[]), 0.0);
    }

    #[test]
    fn test_percent_containing_directed() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let forward = scorer.percent_containing("salt", "pepper").unwrap();
        let backward = scorer.percent_containing("pepper", "salt").unwrap();
        assert!((forward - 2.0 / 3.0).abs() < 1e-12);
        assert!((backward - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_percent_containing_in_unit_interval() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let names: Vec<String> = index.ingredients().map(str::to_string).collect();
        for first in &names {
            for second in &names {
                let pct = scorer.percent_containing(first, second).unwrap();
                assert!((0.0..=1.0).contains(&pct));
            }
        }
    }

    #[test]
    fn test_percent_containing_self_is_one() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let self_pct = scorer.percent_containing("salt", "salt").unwrap();
        assert_eq!(self_pct, 1.0);
    }

    #[test]
    fn test_self_pair_still_requires_index_entry() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let err = scorer.percent_containing("saffron", "saffron").unwrap_err();
        assert!(matches!(err, MaridajeError::IngredientNotIndexed { .. }));
    }

    #[test]
    fn test_lookup_failure_for_unindexed_term1() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let err = scorer.percent_containing("saffron", "salt").unwrap_err();
        assert!(matches!(err, MaridajeError::IngredientNotIndexed { .. }));
    }

    #[test]
    fn test_unindexed_term2_scores_zero() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let pct = scorer.percent_containing("salt", "saffron").unwrap();
        assert_eq!(pct, 0.0);
    }

    #[test]
    fn test_memoization_no_recomputation() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let first = scorer.percent_containing("salt", "pepper").unwrap();
        assert_eq!(scorer.computations(), 1);
        let second = scorer.percent_containing("salt", "pepper").unwrap();
        assert_eq!(scorer.computations(), 1);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_cache_keyed_by_ordered_pair() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        scorer.percent_containing("salt", "pepper").unwrap();
        scorer.percent_containing("pepper", "salt").unwrap();
        assert_eq!(scorer.computations(), 2);
        assert_eq!(scorer.cached_pairs(), 2);
    }

    #[test]
    fn test_reciprocal_score_concrete() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let score = scorer.reciprocal_score("salt", "pepper").unwrap();
        let expected = (2.0f64 / 3.0).sqrt();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_reciprocal_score_symmetric() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let ab = scorer.reciprocal_score("salt", "onion").unwrap();
        let ba = scorer.reciprocal_score("onion", "salt").unwrap();
        assert_eq!(ab.to_bits(), ba.to_bits());
    }

    #[test]
    fn test_n_way_score_matches_reciprocal_for_pairs() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let reciprocal = scorer.reciprocal_score("salt", "pepper").unwrap();
        let n_way = scorer.n_way_score(&["salt", "pepper"]).unwrap();
        assert!((reciprocal - n_way).abs() < 1e-12);
    }

    #[test]
    fn test_n_way_score_trinity() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        let score = scorer.n_way_score(&["onion", "pepper", "salt"]).unwrap();
        assert!(score > 0.0 && score <= 1.0);
    }

    #[test]
    fn test_n_way_score_rejects_small_subsets() {
        let index = sample_index();
        let mut scorer = AssociationScorer::new(&index);
        assert!(matches!(
            scorer.n_way_score(&["salt"]).unwrap_err(),
            MaridajeError::InvalidSubsetSize { n: 1, .. }
        ));
        assert!(matches!(
            scorer.n_way_score(&[]).unwrap_err(),
            MaridajeError::InvalidSubsetSize { n: 0, .. }
        ));
    }

    #[test]
    fn test_n_way_zero_direction_sinks_score() {
        // garlic and basil never share a recipe, so any set containing
        // both scores exactly zero.
        let recipes = vec![
            Recipe::from_ingredients(["salt", "garlic"]),
            Recipe::from_ingredients(["salt", "garlic"]),
            Recipe::from_ingredients(["salt", "basil"]),
            Recipe::from_ingredients(["salt", "basil"]),
        ];
        let selected = FrequencyMap::from_recipes(&recipes).select_common(2);
        let index = CoOccurrenceIndex::build(&recipes, &selected);
        let mut scorer = AssociationScorer::new(&index);
        let score = scorer.n_way_score(&["basil", "garlic", "salt"]).unwrap();
        assert_eq!(score, 0.0);
    }
}
