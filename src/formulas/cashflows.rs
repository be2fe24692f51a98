//! Monthly cash flows after loan payment, charges and tax

use serde::{Deserialize, Serialize};

/// Monthly cash-flow figures; negative values are shortfalls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlows {
    /// Rent minus loan payment
    pub gross: f64,
    /// Gross minus monthly charges
    pub net_charges: f64,
    /// Net of charges minus monthly tax
    pub net_tax: f64,
}

/// Successively subtract loan payment, charges and tax from monthly rent
pub fn cash_flows(
    monthly_rent: f64,
    monthly_payment: f64,
    monthly_charges: f64,
    monthly_tax: f64,
) -> CashFlows {
    let gross = monthly_rent - monthly_payment;
    let net_charges = gross - monthly_charges;
    let net_tax = net_charges - monthly_tax;

    CashFlows {
        gross,
        net_charges,
        net_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_cash_flows() {
        let cf = cash_flows(1_000.0, 1_043.93, 3_100.0 / 12.0, 25.0);

        assert_abs_diff_eq!(cf.gross, -43.93, epsilon = 1e-9);
        assert_abs_diff_eq!(cf.net_charges, -302.26, epsilon = 0.01);
        assert_abs_diff_eq!(cf.net_tax, -327.26, epsilon = 0.01);
    }

    #[test]
    fn test_positive_cash_flow() {
        let cf = cash_flows(2_000.0, 800.0, 200.0, 100.0);
        assert_eq!(
            cf,
            CashFlows {
                gross: 1_200.0,
                net_charges: 1_000.0,
                net_tax: 900.0,
            }
        );
    }

    #[test]
    fn test_cash_flow_ordering() {
        for &(rent, payment, charges, tax) in &[
            (1_000.0, 1_043.93, 258.33, 25.0),
            (500.0, 0.0, 0.0, 0.0),
            (2_500.0, 1_200.0, 90.0, 310.0),
        ] {
            let cf = cash_flows(rent, payment, charges, tax);
            assert!(cf.net_tax <= cf.net_charges);
            assert!(cf.net_charges <= cf.gross);
        }
    }
}
