//! Fixed-rate amortizing loan payment
//!
//! Computes the level monthly installment that retires a principal plus
//! compound interest over the loan term.

use crate::error::EvaluationError;
use crate::investment::MONTHS_PER_YEAR;

/// Convert an annual percentage rate (3.5 = 3.5%) to a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / MONTHS_PER_YEAR / 100.0
}

/// Number of monthly installments over the term
pub fn installments(term_years: f64) -> f64 {
    term_years * MONTHS_PER_YEAR
}

/// Calculate the fixed monthly payment of an amortizing loan.
///
/// # Arguments
/// * `principal` - Amount borrowed, `>= 0`
/// * `annual_rate_pct` - Annual interest rate in percent, `>= 0`
/// * `term_years` - Loan duration in years, `> 0`
///
/// A zero rate degenerates to `principal / n`. A non-positive term is a
/// contract violation and yields a non-finite value; use
/// [`check_loan_terms`] to reject it beforehand.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: f64) -> f64 {
    let r = monthly_rate(annual_rate_pct);
    let n = installments(term_years);

    if r == 0.0 {
        return principal / n;
    }

    // (1+r)^n - 1 without cancellation at small r
    let growth_m1 = (n * r.ln_1p()).exp_m1();
    principal * r * (growth_m1 + 1.0) / growth_m1
}

/// Check the loan preconditions of [`monthly_payment`]
pub fn check_loan_terms(
    principal: f64,
    annual_rate_pct: f64,
    term_years: f64,
) -> Result<(), EvaluationError> {
    for (field, value) in [
        ("loan_principal", principal),
        ("loan_rate_pct", annual_rate_pct),
        ("loan_term_years", term_years),
    ] {
        if !value.is_finite() {
            return Err(EvaluationError::NonFiniteInput { field });
        }
    }
    if term_years <= 0.0 {
        return Err(EvaluationError::NonPositiveTerm { term_years });
    }
    if annual_rate_pct < 0.0 {
        return Err(EvaluationError::NegativeRate {
            rate_pct: annual_rate_pct,
        });
    }
    if principal < 0.0 {
        return Err(EvaluationError::NegativePrincipal { principal });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_default_loan_payment() {
        // 180k at 3.5% over 20 years
        let payment = monthly_payment(180_000.0, 3.5, 20.0);
        assert_abs_diff_eq!(payment, 1043.93, epsilon = 0.01);
        assert_relative_eq!(monthly_rate(3.5), 0.002_916_666_666_666_667, epsilon = 1e-15);
        assert_abs_diff_eq!(installments(20.0), 240.0);
    }

    #[test]
    fn test_zero_rate_is_linear() {
        assert_eq!(monthly_payment(120_000.0, 0.0, 10.0), 1000.0);

        for (principal, years) in [(0.0, 5.0), (50_000.0, 7.0), (333_333.0, 25.0)] {
            assert_eq!(
                monthly_payment(principal, 0.0, years),
                principal / (years * 12.0)
            );
        }
    }

    #[test]
    fn test_total_repaid_covers_principal() {
        for &(principal, rate, years) in &[
            (180_000.0, 3.5, 20.0),
            (10_000.0, 0.01, 1.0),
            (250_000.0, 12.0, 30.0),
            (1.0, 1.5, 15.0),
            (2_000.7, 1e-4, 1.0),
            (2_000.7, 1e-6, 1.0),
            (2_000.7, 1e-9, 1.0),
            (180_000.0, 1e-6, 20.0),
        ] {
            let payment = monthly_payment(principal, rate, years);
            assert!(
                payment * installments(years) >= principal,
                "payment {} over {} years does not repay {}",
                payment,
                years,
                principal
            );
        }
    }

    #[test]
    fn test_tiny_rate_uses_annuity_formula() {
        // 1e-9 % is positive, so the payment must carry some interest
        let linear = monthly_payment(2_000.7, 0.0, 1.0);
        let tiny = monthly_payment(2_000.7, 1e-9, 1.0);
        assert!(tiny > linear, "{} should exceed {}", tiny, linear);
        assert_relative_eq!(tiny, linear, max_relative = 1e-9);
    }

    #[test]
    fn test_reference_mortgage() {
        // 250k at 5% over 30 years is 1342.05/month
        assert_abs_diff_eq!(monthly_payment(250_000.0, 5.0, 30.0), 1342.05, epsilon = 0.01);
    }

    #[test]
    fn test_zero_term_is_non_finite() {
        assert!(!monthly_payment(100_000.0, 3.0, 0.0).is_finite());
        assert!(monthly_payment(100_000.0, 0.0, 0.0).is_infinite());
    }

    #[test]
    fn test_check_loan_terms() {
        assert_eq!(check_loan_terms(180_000.0, 3.5, 20.0), Ok(()));
        assert_eq!(check_loan_terms(120_000.0, 0.0, 10.0), Ok(()));
        assert_eq!(
            check_loan_terms(100_000.0, 3.0, 0.0),
            Err(EvaluationError::NonPositiveTerm { term_years: 0.0 })
        );
        assert_eq!(
            check_loan_terms(100_000.0, -1.0, 10.0),
            Err(EvaluationError::NegativeRate { rate_pct: -1.0 })
        );
        assert_eq!(
            check_loan_terms(-1.0, 1.0, 10.0),
            Err(EvaluationError::NegativePrincipal { principal: -1.0 })
        );
        assert_eq!(
            check_loan_terms(f64::INFINITY, 1.0, 10.0),
            Err(EvaluationError::NonFiniteInput { field: "loan_principal" })
        );
    }
}
