//! Rental Yield - profitability and liquidity metrics for rental property investments
//!
//! This library provides:
//! - Fixed-rate amortizing loan payments
//! - Gross, net-of-charges and net-of-tax yields on acquisition cost
//! - Monthly cash flows after loan payment, charges and tax
//! - Parallel batch evaluation and loan-rate sweeps
//! - Display-mode selection over a fully computed result

pub mod error;
pub mod investment;
pub mod formulas;
pub mod evaluation;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{EvaluationError, LoadError};
pub use investment::{InvestmentInput, DerivedAggregates, Scenario};
pub use evaluation::{InvestmentEvaluator, EvaluationResult};
pub use report::DisplayMode;
pub use scenario::ScenarioRunner;

/// Evaluate one input with the stateless evaluator
pub fn evaluate(input: &InvestmentInput) -> EvaluationResult {
    InvestmentEvaluator::new().evaluate(input)
}

/// Checked variant of [`evaluate`]
pub fn try_evaluate(input: &InvestmentInput) -> Result<EvaluationResult, EvaluationError> {
    InvestmentEvaluator::new().try_evaluate(input)
}
