//! Investment input record and the aggregates derived from it

use serde::{Deserialize, Serialize};

use crate::error::EvaluationError;
use crate::formulas::check_loan_terms;

/// Months per year, used for every annual/monthly conversion
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Financial inputs describing one rental property investment.
///
/// Monetary fields are in currency units; recurring charges are annual.
/// Rates are percentages (3.5 means 3.5%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvestmentInput {
    // Acquisition
    pub purchase_price: f64,
    pub notary_fees: f64,
    pub renovation_cost: f64,

    // Income
    pub monthly_rent: f64,

    // Annual charges
    pub property_tax: f64,
    pub condo_charges: f64,
    pub insurance: f64,
    pub other_charges: f64,

    // Financing
    pub loan_principal: f64,
    pub loan_term_years: f64,
    pub loan_rate_pct: f64,

    /// Marginal tax rate applied to rental income
    pub tax_rate_pct: f64,
}

impl Default for InvestmentInput {
    fn default() -> Self {
        Self {
            purchase_price: 200_000.0,
            notary_fees: 16_000.0,
            renovation_cost: 10_000.0,
            monthly_rent: 1_000.0,
            property_tax: 1_200.0,
            condo_charges: 1_200.0,
            insurance: 200.0,
            other_charges: 500.0,
            loan_principal: 180_000.0,
            loan_term_years: 20.0,
            loan_rate_pct: 3.5,
            tax_rate_pct: 30.0,
        }
    }
}

impl InvestmentInput {
    /// Total acquisition cost: purchase price + notary fees + renovation
    pub fn total_acquisition_cost(&self) -> f64 {
        self.purchase_price + self.notary_fees + self.renovation_cost
    }

    /// Sum of all recurring annual charges
    pub fn annual_charge_total(&self) -> f64 {
        self.property_tax + self.condo_charges + self.insurance + self.other_charges
    }

    /// Compute the per-evaluation aggregates
    pub fn aggregates(&self) -> DerivedAggregates {
        let annual_charge_total = self.annual_charge_total();
        let monthly_tax = self.monthly_rent * (self.tax_rate_pct / 100.0) / MONTHS_PER_YEAR;

        DerivedAggregates {
            total_acquisition_cost: self.total_acquisition_cost(),
            annual_rent: self.monthly_rent * MONTHS_PER_YEAR,
            annual_charge_total,
            monthly_charges: annual_charge_total / MONTHS_PER_YEAR,
            monthly_tax,
            annual_tax: monthly_tax * MONTHS_PER_YEAR,
        }
    }

    /// Field names paired with values, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 12] {
        [
            ("purchase_price", self.purchase_price),
            ("notary_fees", self.notary_fees),
            ("renovation_cost", self.renovation_cost),
            ("monthly_rent", self.monthly_rent),
            ("property_tax", self.property_tax),
            ("condo_charges", self.condo_charges),
            ("insurance", self.insurance),
            ("other_charges", self.other_charges),
            ("loan_principal", self.loan_principal),
            ("loan_term_years", self.loan_term_years),
            ("loan_rate_pct", self.loan_rate_pct),
            ("tax_rate_pct", self.tax_rate_pct),
        ]
    }

    /// Check the preconditions the formulas rely on.
    ///
    /// Only the stated preconditions are enforced; negative charges or rents
    /// pass through untouched.
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if let Some(&(field, _)) = self.fields().iter().find(|(_, v)| !v.is_finite()) {
            return Err(EvaluationError::NonFiniteInput { field });
        }
        check_loan_terms(self.loan_principal, self.loan_rate_pct, self.loan_term_years)?;
        let total = self.total_acquisition_cost();
        if total <= 0.0 {
            return Err(EvaluationError::NonPositiveAcquisitionCost { total });
        }
        Ok(())
    }
}

/// Intermediate quantities derived once per evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAggregates {
    pub total_acquisition_cost: f64,
    pub annual_rent: f64,
    pub annual_charge_total: f64,
    pub monthly_charges: f64,
    pub monthly_tax: f64,
    pub annual_tax: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_aggregates() {
        let agg = InvestmentInput::default().aggregates();

        assert_abs_diff_eq!(agg.total_acquisition_cost, 226_000.0);
        assert_abs_diff_eq!(agg.annual_rent, 12_000.0);
        assert_abs_diff_eq!(agg.annual_charge_total, 3_100.0);
        assert_abs_diff_eq!(agg.monthly_charges, 258.333_333, epsilon = 1e-6);
        assert_abs_diff_eq!(agg.monthly_tax, 25.0, epsilon = 1e-12);
        assert_abs_diff_eq!(agg.annual_tax, 300.0, epsilon = 1e-10);
    }

    #[test]
    fn test_validate_defaults() {
        assert!(InvestmentInput::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_term() {
        let input = InvestmentInput {
            loan_term_years: 0.0,
            ..Default::default()
        };
        assert_eq!(
            input.validate(),
            Err(EvaluationError::NonPositiveTerm { term_years: 0.0 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_cost() {
        let input = InvestmentInput {
            purchase_price: 0.0,
            notary_fees: 0.0,
            renovation_cost: 0.0,
            ..Default::default()
        };
        assert_eq!(
            input.validate(),
            Err(EvaluationError::NonPositiveAcquisitionCost { total: 0.0 })
        );
    }

    #[test]
    fn test_validate_names_non_finite_field() {
        let input = InvestmentInput {
            insurance: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            input.validate(),
            Err(EvaluationError::NonFiniteInput { field: "insurance" })
        );
    }

    #[test]
    fn test_validate_rejects_negative_loan_terms() {
        let negative_rate = InvestmentInput {
            loan_rate_pct: -0.5,
            ..Default::default()
        };
        assert_eq!(
            negative_rate.validate(),
            Err(EvaluationError::NegativeRate { rate_pct: -0.5 })
        );

        let negative_principal = InvestmentInput {
            loan_principal: -10.0,
            ..Default::default()
        };
        assert_eq!(
            negative_principal.validate(),
            Err(EvaluationError::NegativePrincipal { principal: -10.0 })
        );
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let input = InvestmentInput {
            loan_rate_pct: 0.0,
            ..Default::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let input: InvestmentInput =
            serde_json::from_str(r#"{"monthly_rent": 1500.0}"#).unwrap();
        assert_abs_diff_eq!(input.monthly_rent, 1_500.0);
        assert_abs_diff_eq!(input.purchase_price, 200_000.0);
    }
}
