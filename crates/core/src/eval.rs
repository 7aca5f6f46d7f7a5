//! Two-tier expression evaluation
//!
//! Unit-bearing expressions (`5N * 8kg`) and pure symbolic math (`sqrt(16)`)
//! use incompatible grammars, and the caller cannot know in advance which
//! applies. The chain therefore tries the dimension-aware quantity evaluator
//! first and falls back to a dimensionless numeric evaluator (`exmex`), which
//! ignores units but understands functions. Both failing yields
//! [`Error::Evaluation`] carrying both causes; neither is silently dropped.

use crate::error::{Error, Result};
use crate::units::{format_sig, Quantity};

/// Evaluator chain, tried in order. Each entry returns the rendered result or
/// its failure message.
type Attempt = fn(&str) -> std::result::Result<String, String>;

const CHAIN: [(&str, Attempt); 2] = [
    ("dimension-aware", eval_with_units),
    ("dimensionless", eval_numeric),
];

/// Evaluate an arithmetic expression that may mix numbers, units, and
/// function calls.
///
/// # Errors
/// [`Error::Evaluation`] when every evaluator in the chain fails; the message
/// includes each underlying cause.
pub fn evaluate(expr: &str) -> Result<String> {
    let mut causes = Vec::with_capacity(CHAIN.len());
    for (name, run) in CHAIN {
        match run(expr) {
            Ok(rendered) => return Ok(rendered),
            Err(cause) => {
                tracing::debug!(evaluator = name, %cause, "evaluator failed, trying next");
                causes.push(cause);
            }
        }
    }
    let mut causes = causes.into_iter();
    Err(Error::Evaluation {
        unit_cause: causes.next().unwrap_or_default(),
        numeric_cause: causes.next().unwrap_or_default(),
    })
}

/// Dimension-aware tier: parse as a quantity expression and show the result
/// in its natural unit plus its SI-base reduction.
fn eval_with_units(expr: &str) -> std::result::Result<String, String> {
    let quantity = Quantity::parse(expr).map_err(|e| e.to_string())?;
    Ok(render_quantity(expr, &quantity))
}

/// Dimensionless tier: numeric evaluation that ignores units entirely but
/// supports functions (sqrt, sin, …).
fn eval_numeric(expr: &str) -> std::result::Result<String, String> {
    let value = exmex::eval_str::<f64>(expr).map_err(|e| e.to_string())?;
    Ok(format!("{} = {}", expr.trim(), format_sig(value, 6)))
}

/// Render `"{expr} = {result} = {base}"`, collapsing the duplicate tail for
/// dimensionless results.
fn render_quantity(expr: &str, quantity: &Quantity) -> String {
    let expr = expr.trim();
    if quantity.unit.dim.is_dimensionless() {
        let value = quantity.value * quantity.unit.factor;
        return format!("{expr} = {}", format_sig(value, 6));
    }
    let base = quantity.reduce_to_base();
    format!(
        "{expr} = {} {} = {} {}",
        format_sig(quantity.value, 6),
        quantity.unit.label,
        format_sig(base.value, 6),
        base.unit.label
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_expression_renders_natural_and_base_form() {
        let out = evaluate("5N * 8kg").unwrap();
        assert_eq!(out, "5N * 8kg = 40 N·kg = 40 kg^2·m/s^2");
    }

    #[test]
    fn test_dimensionless_expression_uses_unit_tier() {
        assert_eq!(evaluate("(3/4) * (2/5)").unwrap(), "(3/4) * (2/5) = 0.3");
    }

    #[test]
    fn test_function_call_falls_back_to_numeric_tier() {
        assert_eq!(evaluate("sqrt(16)").unwrap(), "sqrt(16) = 4");
    }

    #[test]
    fn test_double_failure_reports_both_causes() {
        let err = evaluate("flux capacitor +").unwrap_err();
        let Error::Evaluation {
            unit_cause,
            numeric_cause,
        } = &err
        else {
            panic!("expected Evaluation error, got {err:?}");
        };
        assert!(!unit_cause.is_empty());
        assert!(!numeric_cause.is_empty());
        let message = err.to_string();
        assert!(message.contains(unit_cause.as_str()));
        assert!(message.contains(numeric_cause.as_str()));
    }
}
