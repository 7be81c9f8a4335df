use arith_eval::evaluate;
use serde::Serialize;

/// Structured result of evaluating one expression, in a JSON-friendly
/// shape for IDE and tooling integration.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// The computed value, absent when evaluation failed
    pub value: Option<f64>,
    /// Error messages, empty on success
    pub errors: Vec<String>,
}

/// Evaluate a source string and return a structured report instead of a
/// bare result. This is the backend of the CLI's JSON output mode.
pub fn evaluate_report(source: &str) -> EvalReport {
    match evaluate(source) {
        Ok(value) => EvalReport {
            value: Some(value),
            errors: Vec::new(),
        },
        Err(err) => EvalReport {
            value: None,
            errors: vec![err.to_string()],
        },
    }
}
