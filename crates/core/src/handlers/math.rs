use serde_json::Value;
use tracing::debug;

use crate::expr::evaluate;
use crate::registry::{Handler, HandlerResult, Params};

/// Result text for any expression that cannot be evaluated.
pub const EVAL_FAILURE: &str = "Error";

/// Evaluates `params.expression` with the restricted arithmetic evaluator and
/// returns the result as text. Never fails at the call level.
pub struct MathHandler;

impl Handler for MathHandler {
    fn handle(&self, params: &Params) -> HandlerResult {
        let expression = match params.get("expression") {
            None | Some(Value::Null) => "",
            Some(Value::String(s)) => s.as_str(),
            Some(_) => return Ok(Value::from(EVAL_FAILURE)),
        };

        let text = match evaluate(expression) {
            Ok(number) => number.to_string(),
            Err(e) => {
                debug!(expression, error = %e, "evaluation failed");
                EVAL_FAILURE.to_string()
            }
        };
        Ok(Value::String(text))
    }
}
