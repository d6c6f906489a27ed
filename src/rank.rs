//! Ranking and search operations built on the association scorer.
//!
//! Three query forms:
//!
//! - [`rank_directed`] / [`rank_reciprocal`]: full pairwise rankings over
//!   every ordered (respectively unordered) pair of indexed ingredients.
//! - [`suggest_next`] / [`autocomplete`]: best-next-ingredient search given
//!   a partial ingredient list, optionally iterated to "grow" a recipe.
//! - [`rank_n_sets`]: exhaustive ranking of every n-ingredient combination
//!   ("trinities" at n = 3).
//!
//! All rankings sort by score descending with a lexicographic tie-break on
//! the ingredient names, so results are reproducible regardless of map
//! iteration order. The subset search is exponential in the selected-set
//! size for fixed n; [`SubsetSearchOptions::with_max_subsets`] bounds it as
//! a first-class part of the contract.

use crate::error::{MaridajeError, Result};
use crate::score::{geometric_mean, AssociationScorer};
use serde::{Deserialize, Serialize};

/// One directed pairing: the fraction of `first`'s co-recipes containing
/// `second`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectedPair {
    pub first: String,
    pub second: String,
    pub score: f64,
}

/// One reciprocal pairing: the geometric mean of both directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipPair {
    /// The unordered pair, stored in lexicographic order.
    pub pair: [String; 2],
    pub score: f64,
}

/// One scored n-ingredient combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedSet {
    /// The combination, stored in lexicographic order.
    pub ingredients: Vec<String>,
    pub score: f64,
}

/// One suggested next ingredient for a partial recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub ingredient: String,
    pub score: f64,
}

/// Options for the full pairwise rankings.
///
/// Self-pairs always score a trivial 1.0 and would crowd the top of any
/// "most associated" ranking, so they are excluded unless explicitly
/// requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairRankOptions {
    include_self_pairs: bool,
}

impl PairRankOptions {
    /// Default options: self-pairs excluded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Include `(i, i)` pairs in the directed ranking.
    #[must_use]
    pub fn with_self_pairs(mut self, include: bool) -> Self {
        self.include_self_pairs = include;
        self
    }

    /// Whether `(i, i)` pairs are included.
    #[must_use]
    pub fn include_self_pairs(&self) -> bool {
        self.include_self_pairs
    }
}

/// Options bounding the exhaustive subset search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubsetSearchOptions {
    max_subsets: Option<usize>,
}

impl SubsetSearchOptions {
    /// Default options: no iteration cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of combinations the search may evaluate.
    ///
    /// The cap is checked against C(k, n) before any scoring work; an
    /// over-budget search fails immediately with
    /// [`MaridajeError::SearchBudgetExceeded`].
    #[must_use]
    pub fn with_max_subsets(mut self, limit: usize) -> Self {
        self.max_subsets = Some(limit);
        self
    }

    /// The configured cap, if any.
    #[must_use]
    pub fn max_subsets(&self) -> Option<usize> {
        self.max_subsets
    }
}

/// Rank every ordered pair of indexed ingredients by directed score.
///
/// Directed means asymmetric: potatoes can rate salt highly (most potato
/// recipes have salt) while salt rates potatoes poorly. Sorted by score
/// descending, ties broken lexicographically on `(first, second)`.
///
/// # Errors
///
/// Propagates scorer lookup failures; an empty index yields an empty
/// ranking.
pub fn rank_directed(
    scorer: &mut AssociationScorer<'_>,
    options: &PairRankOptions,
) -> Result<Vec<DirectedPair>> {
    let names: Vec<String> = scorer.index().ingredients().map(str::to_string).collect();
    let mut pairs = Vec::new();
    for first in &names {
        for second in &names {
            if first == second && !options.include_self_pairs() {
                continue;
            }
            let score = scorer.percent_containing(first, second)?;
            pairs.push(DirectedPair {
                first: first.clone(),
                second: second.clone(),
                score,
            });
        }
    }
    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .expect("association scores must be valid f64 (not NaN)")
            .then_with(|| a.first.cmp(&b.first))
            .then_with(|| a.second.cmp(&b.second))
    });
    Ok(pairs)
}

/// Rank every unordered pair of indexed ingredients by reciprocal score.
///
/// Sorted by score descending, ties broken lexicographically on the pair.
///
/// # Errors
///
/// Propagates scorer lookup failures; an empty index yields an empty
/// ranking.
pub fn rank_reciprocal(scorer: &mut AssociationScorer<'_>) -> Result<Vec<RecipPair>> {
    let names: Vec<String> = scorer.index().ingredients().map(str::to_string).collect();
    let mut pairs = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            let score = scorer.reciprocal_score(&names[i], &names[j])?;
            pairs.push(RecipPair {
                pair: [names[i].clone(), names[j].clone()],
                score,
            });
        }
    }
    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .expect("association scores must be valid f64 (not NaN)")
            .then_with(|| a.pair.cmp(&b.pair))
    });
    Ok(pairs)
}

/// Find the indexed ingredient that best extends a partial recipe.
///
/// The winner maximizes the geometric mean of
/// `percent_containing(existing, candidate)` over every existing entry.
/// The running best starts at `0.0` and a candidate must strictly exceed
/// it, so a field where every candidate scores zero yields `Ok(None)` —
/// an ingredient can never be suggested with score exactly zero. Among
/// equal scores the lexicographically smallest candidate wins.
///
/// # Errors
///
/// [`MaridajeError::EmptyPartialRecipe`] for an empty partial list;
/// [`MaridajeError::IngredientNotIndexed`] if an existing entry has no
/// index entry.
pub fn suggest_next(
    scorer: &mut AssociationScorer<'_>,
    partial: &[&str],
) -> Result<Option<Suggestion>> {
    if partial.is_empty() {
        return Err(MaridajeError::EmptyPartialRecipe);
    }
    let candidates: Vec<String> = scorer
        .index()
        .ingredients()
        .filter(|name| !partial.contains(name))
        .map(str::to_string)
        .collect();

    let mut best: Option<Suggestion> = None;
    let mut factors = Vec::with_capacity(partial.len());
    for candidate in candidates {
        factors.clear();
        for existing in partial {
            factors.push(scorer.percent_containing(existing, &candidate)?);
        }
        let score = geometric_mean(&factors);
        if score > best.as_ref().map_or(0.0, |s| s.score) {
            best = Some(Suggestion {
                ingredient: candidate,
                score,
            });
        }
    }
    Ok(best)
}

/// Grow a partial recipe by up to `steps` ingredients, greedily.
///
/// Repeatedly applies [`suggest_next`], appending each winner to the
/// partial list. Stops early once no candidate scores above zero. Returns
/// the suggestions in the order they were made.
///
/// # Errors
///
/// Same conditions as [`suggest_next`].
pub fn autocomplete(
    scorer: &mut AssociationScorer<'_>,
    seed: &[&str],
    steps: usize,
) -> Result<Vec<Suggestion>> {
    if seed.is_empty() {
        return Err(MaridajeError::EmptyPartialRecipe);
    }
    let mut partial: Vec<String> = seed.iter().map(|&name| name.to_string()).collect();
    let mut picks = Vec::new();
    for _ in 0..steps {
        let current: Vec<&str> = partial.iter().map(String::as_str).collect();
        match suggest_next(scorer, &current)? {
            Some(suggestion) => {
                partial.push(suggestion.ingredient.clone());
                picks.push(suggestion);
            }
            None => break,
        }
    }
    Ok(picks)
}

/// Rank every combination of `n` distinct indexed ingredients by n-way
/// score.
///
/// The search evaluates C(k, n) combinations for k indexed ingredients —
/// exponential in k for fixed n, worse for larger n — so choose the
/// frequency threshold to bound k before calling this for n >= 3, or set
/// [`SubsetSearchOptions::with_max_subsets`]. `n` larger than the index
/// yields an empty ranking. Sorted by score descending, ties broken
/// lexicographically on the combination.
///
/// # Errors
///
/// [`MaridajeError::InvalidSubsetSize`] for n < 2;
/// [`MaridajeError::SearchBudgetExceeded`] if the combination count
/// exceeds the configured cap (checked before any scoring work).
pub fn rank_n_sets(
    scorer: &mut AssociationScorer<'_>,
    n: usize,
    options: &SubsetSearchOptions,
) -> Result<Vec<RankedSet>> {
    if n < 2 {
        return Err(MaridajeError::subset_too_small(n));
    }
    let names: Vec<String> = scorer.index().ingredients().map(str::to_string).collect();
    if n > names.len() {
        return Ok(Vec::new());
    }

    let required = binomial(names.len(), n);
    if let Some(limit) = options.max_subsets() {
        if required > limit {
            return Err(MaridajeError::SearchBudgetExceeded { required, limit });
        }
    }

    // `required` can dwarf addressable memory on a wide, uncapped index;
    // clamp the reservation and let the vec grow past it on demand.
    let mut sets = Vec::with_capacity(required.min(1 << 20));
    let mut indices: Vec<usize> = (0..n).collect();
    loop {
        let combination: Vec<&str> = indices.iter().map(|&i| names[i].as_str()).collect();
        let score = scorer.n_way_score(&combination)?;
        sets.push(RankedSet {
            ingredients: combination.iter().map(|&name| name.to_string()).collect(),
            score,
        });
        if !advance_combination(&mut indices, names.len()) {
            break;
        }
    }

    sets.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .expect("association scores must be valid f64 (not NaN)")
            .then_with(|| a.ingredients.cmp(&b.ingredients))
    });
    Ok(sets)
}

/// Advance `indices` to the next combination of its length drawn from
/// `0..total`, in lexicographic order. Returns false once exhausted.
fn advance_combination(indices: &mut [usize], total: usize) -> bool {
    let n = indices.len();
    let mut position = n;
    while position > 0 {
        position -= 1;
        if indices[position] != position + total - n {
            indices[position] += 1;
            for later in (position + 1)..n {
                indices[later] = indices[later - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// C(k, n); returns `usize::MAX` once the running product overflows, so
/// oversized counts still exceed any finite budget.
fn binomial(k: usize, n: usize) -> usize {
    if n > k {
        return 0;
    }
    let n = n.min(k - n);
    let mut result: usize = 1;
    for i in 0..n {
        result = match result.checked_mul(k - i) {
            Some(product) => product / (i + 1),
            None => return usize::MAX,
        };
    }
    result
}
