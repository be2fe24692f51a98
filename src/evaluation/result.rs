//! Evaluation output record

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::formulas::{CashFlows, Yields};

/// Complete result of evaluating one investment input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    // Yields (percent)
    pub gross_yield: f64,
    pub net_charges_yield: f64,
    pub net_tax_yield: f64,

    // Financing (currency per month)
    pub monthly_payment: f64,

    // Cash flows (currency per month)
    pub gross_cash_flow: f64,
    pub net_charges_cash_flow: f64,
    pub net_tax_cash_flow: f64,
}

impl EvaluationResult {
    pub fn new(yields: Yields, monthly_payment: f64, cash_flows: CashFlows) -> Self {
        Self {
            gross_yield: yields.gross,
            net_charges_yield: yields.net_charges,
            net_tax_yield: yields.net_tax,
            monthly_payment,
            gross_cash_flow: cash_flows.gross,
            net_charges_cash_flow: cash_flows.net_charges,
            net_tax_cash_flow: cash_flows.net_tax,
        }
    }

    /// Field names paired with values, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 7] {
        [
            ("gross_yield", self.gross_yield),
            ("net_charges_yield", self.net_charges_yield),
            ("net_tax_yield", self.net_tax_yield),
            ("monthly_payment", self.monthly_payment),
            ("gross_cash_flow", self.gross_cash_flow),
            ("net_charges_cash_flow", self.net_charges_cash_flow),
            ("net_tax_cash_flow", self.net_tax_cash_flow),
        ]
    }

    /// True when every field is a finite number
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, v)| v.is_finite())
    }

    /// Reject the result if any field is NaN or infinite
    pub fn ensure_finite(self) -> Result<Self, EvaluationError> {
        match self.fields().iter().find(|(_, v)| !v.is_finite()) {
            Some(&(field, _)) => Err(EvaluationError::NonFiniteResult { field }),
            None => Ok(self),
        }
    }
}
