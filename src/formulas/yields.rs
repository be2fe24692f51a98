//! Yield ratios on total acquisition cost
//!
//! Every yield has the shape `income / total_acquisition_cost * 100`. A zero
//! acquisition cost is a precondition violation and is not guarded here.
//!
//! The net yields subtract property tax and insurance on top of the annual
//! charge total, even though that total already contains both. This matches
//! the published formula set and must not be "corrected".

use serde::{Deserialize, Serialize};

use crate::investment::DerivedAggregates;

/// Gross yield in percent: rent only
pub fn gross_yield(annual_rent: f64, total_acquisition_cost: f64) -> f64 {
    annual_rent / total_acquisition_cost * 100.0
}

/// Yield net of recurring charges, in percent
pub fn net_charges_yield(
    annual_rent: f64,
    property_tax: f64,
    insurance: f64,
    annual_charge_total: f64,
    total_acquisition_cost: f64,
) -> f64 {
    let net_income = annual_rent - property_tax - insurance - annual_charge_total;
    net_income / total_acquisition_cost * 100.0
}

/// Yield net of recurring charges and income tax, in percent
pub fn net_tax_yield(
    annual_rent: f64,
    property_tax: f64,
    insurance: f64,
    annual_charge_total: f64,
    annual_tax: f64,
    total_acquisition_cost: f64,
) -> f64 {
    let net_income = annual_rent - property_tax - insurance - annual_charge_total - annual_tax;
    net_income / total_acquisition_cost * 100.0
}

/// The three yields of one evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Yields {
    pub gross: f64,
    pub net_charges: f64,
    pub net_tax: f64,
}

/// Computes all three yields from one set of aggregates
pub struct YieldCalculator;

impl YieldCalculator {
    pub fn compute(aggregates: &DerivedAggregates, property_tax: f64, insurance: f64) -> Yields {
        let cost = aggregates.total_acquisition_cost;
        let rent = aggregates.annual_rent;
        let charges = aggregates.annual_charge_total;

        Yields {
            gross: gross_yield(rent, cost),
            net_charges: net_charges_yield(rent, property_tax, insurance, charges, cost),
            net_tax: net_tax_yield(
                rent,
                property_tax,
                insurance,
                charges,
                aggregates.annual_tax,
                cost,
            ),
        }
    }
}
