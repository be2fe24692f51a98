//! Load investment inputs from JSON records or scenario CSV files

use super::InvestmentInput;
use crate::error::LoadError;
use csv::Reader;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Default path to the scenarios CSV used by the batch runner
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV row; headers are the snake_case field names plus an optional `scenario` label
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    scenario: Option<String>,
    purchase_price: f64,
    notary_fees: f64,
    renovation_cost: f64,
    monthly_rent: f64,
    property_tax: f64,
    condo_charges: f64,
    insurance: f64,
    other_charges: f64,
    loan_principal: f64,
    loan_term_years: f64,
    loan_rate_pct: f64,
    tax_rate_pct: f64,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> Scenario {
        let label = self
            .scenario
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("row {}", row_number));

        Scenario {
            label,
            input: InvestmentInput {
                purchase_price: self.purchase_price,
                notary_fees: self.notary_fees,
                renovation_cost: self.renovation_cost,
                monthly_rent: self.monthly_rent,
                property_tax: self.property_tax,
                condo_charges: self.condo_charges,
                insurance: self.insurance,
                other_charges: self.other_charges,
                loan_principal: self.loan_principal,
                loan_term_years: self.loan_term_years,
                loan_rate_pct: self.loan_rate_pct,
                tax_rate_pct: self.tax_rate_pct,
            },
        }
    }
}

/// An input record with a human-readable label
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub label: String,
    pub input: InvestmentInput,
}

/// Load one input record from a JSON file; missing fields take the defaults
pub fn load_input_json<P: AsRef<Path>>(path: P) -> Result<InvestmentInput, LoadError> {
    let file = File::open(path)?;
    load_input_json_from_reader(BufReader::new(file))
}

/// Load one input record from any JSON reader
pub fn load_input_json_from_reader<R: Read>(reader: R) -> Result<InvestmentInput, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, LoadError> {
    let file = File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(idx + 1));
    }

    log::debug!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
