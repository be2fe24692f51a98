//! Evaluation of one investment input into a complete result

mod engine;
mod result;

pub use engine::InvestmentEvaluator;
pub use result::EvaluationResult;
