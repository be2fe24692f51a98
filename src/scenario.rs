//! Scenario runner for batch evaluations and loan-rate sensitivity
//!
//! Every evaluation is independent, so batches fan out across the rayon
//! thread pool with no shared state.

use rayon::prelude::*;

use crate::error::EvaluationError;
use crate::evaluation::{EvaluationResult, InvestmentEvaluator};
use crate::investment::InvestmentInput;

/// Batch front-end over [`InvestmentEvaluator`]
///
/// # Example
/// ```
/// use rental_yield::{InvestmentInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let sweep = runner.sweep_loan_rates(&InvestmentInput::default(), &[2.0, 3.5, 5.0]);
/// assert!(sweep[0].1.monthly_payment < sweep[2].1.monthly_payment);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    evaluator: InvestmentEvaluator,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            evaluator: InvestmentEvaluator::new(),
        }
    }

    /// Evaluate a single input
    pub fn run(&self, input: &InvestmentInput) -> EvaluationResult {
        self.evaluator.evaluate(input)
    }

    /// Evaluate many inputs in parallel; output order matches input order
    pub fn run_batch(&self, inputs: &[InvestmentInput]) -> Vec<EvaluationResult> {
        log::debug!("evaluating batch of {} inputs", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.evaluator.evaluate(input))
            .collect()
    }

    /// Checked batch evaluation, one outcome per input
    pub fn try_run_batch(
        &self,
        inputs: &[InvestmentInput],
    ) -> Vec<Result<EvaluationResult, EvaluationError>> {
        log::debug!("evaluating checked batch of {} inputs", inputs.len());
        inputs
            .par_iter()
            .map(|input| self.evaluator.try_evaluate(input))
            .collect()
    }

    /// Evaluate the same input at several annual loan rates (percent)
    pub fn sweep_loan_rates(
        &self,
        base: &InvestmentInput,
        rates_pct: &[f64],
    ) -> Vec<(f64, EvaluationResult)> {
        rates_pct
            .par_iter()
            .map(|&rate| {
                let input = InvestmentInput {
                    loan_rate_pct: rate,
                    ..*base
                };
                (rate, self.evaluator.evaluate(&input))
            })
            .collect()
    }
}
