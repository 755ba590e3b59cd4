//! Built-in tool handlers.
//!
//! Each one is a thin stand-in for an external provider and can be replaced
//! at startup through [`crate::registry::RegistryBuilder::register`].

mod calendar;
mod file;
mod mail;
mod market;
mod math;
mod search;

pub use calendar::{CalendarEvent, CalendarHandler};
pub use file::FileHandler;
pub use mail::{MailHandler, MailMessage};
pub use market::MarketHandler;
pub use math::{MathHandler, EVAL_FAILURE};
pub use search::SearchHandler;

use serde_json::{json, Value};

use crate::error::ToolError;
use crate::registry::Params;

/// A successful payload that reports a domain failure.
pub fn domain_error(message: &str) -> Value {
    json!({ "error": message })
}

/// Optional string parameter. `null` counts as absent; any other non-string is rejected.
pub(crate) fn str_param<'a>(params: &'a Params, key: &str) -> Result<Option<&'a str>, ToolError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(ToolError::InvalidArgument(format!(
            "'{}' must be a string, got {}",
            key, other
        ))),
    }
}
