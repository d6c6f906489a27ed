//! Maridaje: ingredient co-occurrence analysis for recipe corpora.
//!
//! Maridaje (Spanish for "pairing") analyzes a corpus of recipes — each an
//! unordered collection of ingredient names — to discover co-occurrence
//! structure: which ingredients appear together, how strongly, and in which
//! direction the association is asymmetric.
//!
//! The pipeline runs strictly forward: count frequencies, filter to the
//! common ingredients, build the co-occurrence index, then score and rank.
//! Everything is an in-memory, single-threaded, read-only computation over
//! the corpus; loading recipes from a dataset and rendering results are the
//! caller's concern.
//!
//! # Quick Start
//!
//! ```
//! use maridaje::prelude::*;
//!
//! let recipes = vec![
//!     Recipe::from_ingredients(["salt", "pepper", "onion"]),
//!     Recipe::from_ingredients(["salt", "onion"]),
//!     Recipe::from_ingredients(["salt", "pepper"]),
//!     Recipe::from_ingredients(["pepper"]),
//! ];
//!
//! // Count, filter, index.
//! let frequencies = FrequencyMap::from_recipes(&recipes);
//! let selected = frequencies.select_common(2);
//! let index = CoOccurrenceIndex::build(&recipes, &selected);
//!
//! // Score: two thirds of salt's co-recipes contain pepper, while every
//! // one of pepper's co-recipes contains salt.
//! let mut scorer = AssociationScorer::new(&index);
//! let forward = scorer.percent_containing("salt", "pepper").unwrap();
//! let backward = scorer.percent_containing("pepper", "salt").unwrap();
//! assert!((forward - 2.0 / 3.0).abs() < 1e-12);
//! assert!((backward - 1.0).abs() < 1e-12);
//!
//! // Rank all reciprocal pairings, strongest first.
//! let pairings = rank_reciprocal(&mut scorer).unwrap();
//! assert_eq!(pairings[0].pair, ["onion".to_string(), "salt".to_string()]);
//! ```
//!
//! # Modules
//!
//! - [`corpus`]: the [`Recipe`](corpus::Recipe) data model
//! - [`frequency`]: per-ingredient recipe counts and the minimum-frequency
//!   filter
//! - [`index`]: the co-occurrence index all scoring operates on
//! - [`score`]: directed, reciprocal, and n-way association scoring with
//!   memoization
//! - [`rank`]: full pairwise rankings, next-ingredient search, and
//!   exhaustive n-subset ranking
//! - [`error`]: the crate error type

pub mod corpus;
pub mod error;
pub mod frequency;
pub mod index;
pub mod prelude;
pub mod rank;
pub mod score;

pub use corpus::Recipe;
pub use error::{MaridajeError, Result};
pub use frequency::{FrequencyMap, SelectedSet};
pub use index::CoOccurrenceIndex;
pub use score::AssociationScorer;
