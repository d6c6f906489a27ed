//! Error types for maridaje operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for maridaje operations.
///
/// Covers index lookup failures, invalid query parameters, and exhausted
/// search budgets. Empty corpora and empty selections are never errors;
/// they produce empty results instead.
///
/// # Examples
///
/// ```
/// use maridaje::error::MaridajeError;
///
/// let err = MaridajeError::IngredientNotIndexed {
///     ingredient: "saffron".to_string(),
/// };
/// assert!(err.to_string().contains("not in the co-occurrence index"));
/// ```
#[derive(Debug)]
pub enum MaridajeError {
    /// The ingredient has no entry in the co-occurrence index — either it
    /// never passed the frequency cutoff, or every recipe containing it had
    /// no other selected ingredient.
    IngredientNotIndexed {
        /// The ingredient name that was looked up
        ingredient: String,
    },

    /// A subset query was issued for fewer than two ingredients.
    InvalidSubsetSize {
        /// Requested subset size
        n: usize,
        /// Constraint description
        constraint: String,
    },

    /// `suggest_next` was called with an empty partial ingredient list.
    EmptyPartialRecipe,

    /// Exhaustive subset search would exceed the configured iteration cap.
    SearchBudgetExceeded {
        /// Number of subsets the search would have to evaluate
        required: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MaridajeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaridajeError::IngredientNotIndexed { ingredient } => {
                write!(
                    f,
                    "ingredient {ingredient:?} is not in the co-occurrence index"
                )
            }
            MaridajeError::InvalidSubsetSize { n, constraint } => {
                write!(f, "invalid subset size: n = {n}, expected {constraint}")
            }
            MaridajeError::EmptyPartialRecipe => {
                write!(
                    f,
                    "partial recipe is empty: at least one ingredient is required"
                )
            }
            MaridajeError::SearchBudgetExceeded { required, limit } => {
                write!(
                    f,
                    "subset search budget exceeded: {required} combinations required, limit is {limit}"
                )
            }
            MaridajeError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MaridajeError {}

impl From<&str> for MaridajeError {
    fn from(msg: &str) -> Self {
        MaridajeError::Other(msg.to_string())
    }
}

impl From<String> for MaridajeError {
    fn from(msg: String) -> Self {
        MaridajeError::Other(msg)
    }
}

impl MaridajeError {
    /// Create a lookup-failure error for an ingredient missing from the index.
    #[must_use]
    pub fn not_indexed(ingredient: &str) -> Self {
        Self::IngredientNotIndexed {
            ingredient: ingredient.to_string(),
        }
    }

    /// Create an invalid-subset-size error for a query with n < 2.
    #[must_use]
    pub fn subset_too_small(n: usize) -> Self {
        Self::InvalidSubsetSize {
            n,
            constraint: "n >= 2".to_string(),
        }
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<&str> for MaridajeError {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

#[allow(clippy::cmp_owned)]
impl PartialEq<MaridajeError> for &str {
    fn eq(&self, other: &MaridajeError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MaridajeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_indexed_display() {
        let err = MaridajeError::not_indexed("saffron");
        let msg = err.to_string();
        assert!(msg.contains("saffron"));
        assert!(msg.contains("not in the co-occurrence index"));
    }

    #[test]
    fn test_invalid_subset_size_display() {
        let err = MaridajeError::subset_too_small(1);
        let msg = err.to_string();
        assert!(msg.contains("n = 1"));
        assert!(msg.contains("n >= 2"));
    }

    #[test]
    fn test_empty_partial_recipe_display() {
        let err = MaridajeError::EmptyPartialRecipe;
        assert!(err.to_string().contains("partial recipe is empty"));
    }

    #[test]
    fn test_search_budget_exceeded_display() {
        let err = MaridajeError::SearchBudgetExceeded {
            required: 161_700,
            limit: 10_000,
        };
        let msg = err.to_string();
        assert!(msg.contains("161700"));
        assert!(msg.contains("10000"));
    }

    #[test]
    fn test_from_str() {
        let err: MaridajeError = "test error".into();
        assert!(matches!(err, MaridajeError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: MaridajeError = "test error".to_string().into();
        assert!(matches!(err, MaridajeError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_error_eq_str() {
        let err = MaridajeError::Other("test error".to_string());
        assert!(err == "test error");
        assert!("test error" == err);
    }

    #[test]
    fn test_error_source_is_none() {
        use std::error::Error;
        let err = MaridajeError::EmptyPartialRecipe;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_debug_impl() {
        let err = MaridajeError::Other("test".to_string());
        let debug_str = format!("{err:?}");
        assert!(debug_str.contains("Other"));
    }
}
