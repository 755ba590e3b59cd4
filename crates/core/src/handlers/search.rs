use serde_json::Value;

use super::str_param;
use crate::config::SearchConfig;
use crate::registry::{Handler, HandlerResult, Params};

/// Deterministic templated answer; no network access.
pub struct SearchHandler {
    template: String,
}

impl SearchHandler {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            template: config.template.clone(),
        }
    }
}

impl Default for SearchHandler {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl Handler for SearchHandler {
    fn handle(&self, params: &Params) -> HandlerResult {
        let query = str_param(params, "query")?.unwrap_or_default();
        Ok(Value::String(self.template.replace("{query}", query)))
    }
}
