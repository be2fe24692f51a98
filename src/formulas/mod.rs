//! Pure calculation formulas: loan payment, yields and cash flows

pub mod annuity;
pub mod yields;
mod cashflows;

pub use annuity::{check_loan_terms, installments, monthly_payment, monthly_rate};
pub use yields::{gross_yield, net_charges_yield, net_tax_yield, YieldCalculator, Yields};
pub use cashflows::{cash_flows, CashFlows};
