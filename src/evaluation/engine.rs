//! Investment evaluator: derives aggregates and runs every formula once

use crate::error::Result;
use crate::formulas::{cash_flows, monthly_payment, YieldCalculator};
use crate::investment::InvestmentInput;
use super::result::EvaluationResult;

/// Stateless evaluator turning one input record into one result.
///
/// Holds no state between calls; equal inputs always give identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestmentEvaluator;

impl InvestmentEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate an input without checking preconditions.
    ///
    /// Out-of-domain inputs (zero term, zero acquisition cost) produce
    /// non-finite fields rather than an error.
    pub fn evaluate(&self, input: &InvestmentInput) -> EvaluationResult {
        let aggregates = input.aggregates();
        log::trace!("derived aggregates: {:?}", aggregates);

        let payment = monthly_payment(
            input.loan_principal,
            input.loan_rate_pct,
            input.loan_term_years,
        );

        let yields = YieldCalculator::compute(&aggregates, input.property_tax, input.insurance);

        let flows = cash_flows(
            input.monthly_rent,
            payment,
            aggregates.monthly_charges,
            aggregates.monthly_tax,
        );

        EvaluationResult::new(yields, payment, flows)
    }

    /// Evaluate after checking preconditions, rejecting non-finite results
    pub fn try_evaluate(&self, input: &InvestmentInput) -> Result<EvaluationResult> {
        input.validate()?;
        self.evaluate(input).ensure_finite()
    }
}
