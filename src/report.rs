//! Result cards for the three display modes
//!
//! Selecting what to show is a presentation concern: the evaluator always
//! computes the full result and a [`DisplayMode`] only picks cards from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::evaluation::EvaluationResult;
use crate::investment::InvestmentInput;

/// Which subset of the result to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayMode {
    /// Gross yield, loan payment, gross cash flow
    #[default]
    Gross,
    /// Net-of-charges yield and cash flow, plus monthly charges
    Net,
    /// Net-of-tax yield and cash flow, plus monthly charges and tax
    NetTax,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gross" => Ok(DisplayMode::Gross),
            "net" => Ok(DisplayMode::Net),
            "net-tax" => Ok(DisplayMode::NetTax),
            other => Err(format!(
                "unknown display mode `{}` (expected gross, net or net-tax)",
                other
            )),
        }
    }
}

/// Unit suffix of a card value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    Percent,
    Currency,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Percent => "%",
            Unit::Currency => "€",
        }
    }
}

/// One labelled figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultCard {
    pub title: &'static str,
    pub value: f64,
    pub unit: Unit,
}

impl ResultCard {
    fn new(title: &'static str, value: f64, unit: Unit) -> Self {
        Self { title, value, unit }
    }
}

impl fmt::Display for ResultCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_finite() {
            write!(f, "{}: {:.2}{}", self.title, self.value, self.unit.suffix())
        } else {
            // NaN/inf come from out-of-domain inputs
            write!(f, "{}: out of range", self.title)
        }
    }
}

/// Pick the cards shown for `mode`
pub fn cards(
    mode: DisplayMode,
    input: &InvestmentInput,
    result: &EvaluationResult,
) -> Vec<ResultCard> {
    let aggregates = input.aggregates();
    let payment = ResultCard::new("Monthly loan payment", result.monthly_payment, Unit::Currency);

    match mode {
        DisplayMode::Gross => vec![
            ResultCard::new("Gross yield", result.gross_yield, Unit::Percent),
            payment,
            ResultCard::new("Gross monthly cash flow", result.gross_cash_flow, Unit::Currency),
        ],
        DisplayMode::Net => vec![
            ResultCard::new("Net yield", result.net_charges_yield, Unit::Percent),
            payment,
            ResultCard::new("Monthly charges", aggregates.monthly_charges, Unit::Currency),
            ResultCard::new("Net monthly cash flow", result.net_charges_cash_flow, Unit::Currency),
        ],
        DisplayMode::NetTax => vec![
            ResultCard::new("Net-of-tax yield", result.net_tax_yield, Unit::Percent),
            payment,
            ResultCard::new("Total monthly charges", aggregates.monthly_charges, Unit::Currency),
            ResultCard::new("Monthly tax", aggregates.monthly_tax, Unit::Currency),
            ResultCard::new(
                "Net-of-tax monthly cash flow",
                result.net_tax_cash_flow,
                Unit::Currency,
            ),
        ],
    }
}

/// Render the cards for `mode`, one per line
pub fn render(mode: DisplayMode, input: &InvestmentInput, result: &EvaluationResult) -> String {
    cards(mode, input, result)
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
