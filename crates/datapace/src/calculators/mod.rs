//! Pure, deterministic calculators backing the site's interactive widgets.
//!
//! Validation happens here, at the edge of each calculator: request
//! handlers pass inputs through untouched, and out-of-range values are
//! rejected rather than clamped.

pub mod growth;
pub mod maturity;
pub mod roi;

pub use growth::{GrowthProjection, GrowthProjectionInput, GrowthProjectionPoint};
pub use maturity::{MaturityResult, MaturityTier, QuizResponse, QUESTION_COUNT};
pub use roi::{Industry, RecommendedApproach, RoiEstimate, RoiInput, ServiceLevel};

/// Raised when a calculator receives input outside its documented domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculatorError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
