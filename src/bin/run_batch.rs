//! Evaluate every scenario of a CSV file in parallel
//!
//! Usage: cargo run --bin run_batch -- [scenarios.csv] [output.csv]

use anyhow::{Context, Result};
use rental_yield::investment::{load_scenarios, loader::DEFAULT_SCENARIOS_PATH};
use rental_yield::{EvaluationResult, ScenarioRunner};
use std::time::Instant;

const DEFAULT_OUTPUT_PATH: &str = "batch_results.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let start = Instant::now();
    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("failed to load scenarios from {}", input_path))?;
    log::info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let inputs: Vec<_> = scenarios.iter().map(|s| s.input).collect();
    let runner = ScenarioRunner::new();
    let outcomes = runner.try_run_batch(&inputs);

    let mut out = csv::Writer::from_path(&output_path)
        .with_context(|| format!("failed to create {}", output_path))?;

    out.write_record([
        "Scenario",
        "GrossYield",
        "NetChargesYield",
        "NetTaxYield",
        "MonthlyPayment",
        "GrossCashFlow",
        "NetChargesCashFlow",
        "NetTaxCashFlow",
        "Error",
    ])?;

    let mut failed = 0usize;
    let mut best: Option<(&str, EvaluationResult)> = None;

    for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
        match outcome {
            Ok(r) => {
                out.write_record([
                    scenario.label.clone(),
                    format!("{:.4}", r.gross_yield),
                    format!("{:.4}", r.net_charges_yield),
                    format!("{:.4}", r.net_tax_yield),
                    format!("{:.2}", r.monthly_payment),
                    format!("{:.2}", r.gross_cash_flow),
                    format!("{:.2}", r.net_charges_cash_flow),
                    format!("{:.2}", r.net_tax_cash_flow),
                    String::new(),
                ])?;
                if best.map_or(true, |(_, b)| r.net_tax_yield > b.net_tax_yield) {
                    best = Some((scenario.label.as_str(), *r));
                }
            }
            Err(e) => {
                failed += 1;
                log::warn!("scenario {} rejected: {}", scenario.label, e);
                let mut record = vec![scenario.label.clone()];
                record.extend(std::iter::repeat(String::new()).take(7));
                record.push(e.to_string());
                out.write_record(&record)?;
            }
        }
    }
    out.flush()?;

    println!("Output written to {}", output_path);
    println!("\nBatch Summary:");
    println!("  Scenarios: {}", scenarios.len());
    println!("  Rejected:  {}", failed);
    if let Some((label, r)) = best {
        println!(
            "  Best net-of-tax yield: {} ({:.2}%, cash flow {:.2}/month)",
            label, r.net_tax_yield, r.net_tax_cash_flow
        );
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
