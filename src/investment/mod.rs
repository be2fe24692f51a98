//! Investment input data and loading

mod data;
pub mod loader;

pub use data::{DerivedAggregates, InvestmentInput, MONTHS_PER_YEAR};
pub use loader::{
    load_input_json, load_input_json_from_reader, load_scenarios, load_scenarios_from_reader,
    Scenario,
};
