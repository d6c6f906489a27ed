//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use maridaje::prelude::*;
//! ```

pub use crate::corpus::Recipe;
pub use crate::error::{MaridajeError, Result};
pub use crate::frequency::{FrequencyMap, SelectedSet};
pub use crate::index::CoOccurrenceIndex;
pub use crate::rank::{
    autocomplete, rank_directed, rank_n_sets, rank_reciprocal, suggest_next, DirectedPair,
    PairRankOptions, RankedSet, RecipPair, SubsetSearchOptions, Suggestion,
};
pub use crate::score::{geometric_mean, AssociationScorer};
