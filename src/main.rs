//! Rental Yield CLI
//!
//! Evaluates one investment and prints the cards for a display mode

use anyhow::{Context, Result};
use clap::Parser;
use rental_yield::{
    investment::load_input_json,
    report::{self, DisplayMode},
    InvestmentEvaluator, InvestmentInput,
};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rental_yield", version, about = "Yield and cash flow of a rental investment")]
struct Cli {
    /// JSON input record; replaces the field flags below
    #[arg(long)]
    input: Option<PathBuf>,

    /// Which cards to show: gross, net or net-tax
    #[arg(long, default_value = "gross")]
    mode: DisplayMode,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Reject out-of-domain inputs instead of printing non-finite values
    #[arg(long)]
    strict: bool,

    #[arg(long, default_value_t = 200_000.0)]
    purchase_price: f64,
    #[arg(long, default_value_t = 16_000.0)]
    notary_fees: f64,
    #[arg(long, default_value_t = 10_000.0)]
    renovation_cost: f64,
    #[arg(long, default_value_t = 1_000.0)]
    monthly_rent: f64,
    /// Annual property tax
    #[arg(long, default_value_t = 1_200.0)]
    property_tax: f64,
    /// Annual condominium charges
    #[arg(long, default_value_t = 1_200.0)]
    condo_charges: f64,
    /// Annual landlord insurance premium
    #[arg(long, default_value_t = 200.0)]
    insurance: f64,
    /// Other annual charges
    #[arg(long, default_value_t = 500.0)]
    other_charges: f64,
    #[arg(long, default_value_t = 180_000.0)]
    loan_principal: f64,
    #[arg(long, default_value_t = 20.0)]
    loan_term_years: f64,
    /// Annual loan rate in percent
    #[arg(long, default_value_t = 3.5, allow_negative_numbers = true)]
    loan_rate_pct: f64,
    /// Marginal tax rate on rental income in percent
    #[arg(long, default_value_t = 30.0)]
    tax_rate_pct: f64,
}

impl Cli {
    fn investment_input(&self) -> Result<InvestmentInput> {
        if let Some(path) = &self.input {
            return load_input_json(path)
                .with_context(|| format!("failed to load input from {}", path.display()));
        }

        Ok(InvestmentInput {
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
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let input = cli.investment_input()?;
    log::debug!("evaluating {:?}", input);

    let evaluator = InvestmentEvaluator::new();
    let result = if cli.strict {
        evaluator
            .try_evaluate(&input)
            .context("input is outside the supported range")?
    } else {
        evaluator.evaluate(&input)
    };

    if !result.is_finite() {
        log::warn!("result contains non-finite values; check loan term and acquisition cost");
    }

    match cli.format {
        OutputFormat::Text => println!("{}", report::render(cli.mode, &input, &result)),
        OutputFormat::Json => {
            let json = serde_json::json!({
                "input": input,
                "result": result,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
