use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::debug;

use super::domain_error;
use crate::config::{MarketConfig, Quote};
use crate::registry::{Handler, HandlerResult, Params};

const ALIASES: &[(&str, &str)] = &[
    ("黄金", "XAUUSD"),
    ("比特币", "BTCUSDT"),
    ("阿里巴巴", "9988.HK"),
    ("华润万象", "1209.HK"),
    ("美团", "3690.HK"),
    ("小鹏", "9868.HK"),
];

const QUOTES: &[(&str, Quote)] = &[
    ("XAUUSD", Quote::new(2645.50, 0.45)),
    ("BTCUSDT", Quote::new(102450.00, 2.3)),
    ("9988.HK", Quote::new(155.40, -0.5)),
    ("1209.HK", Quote::new(46.52, 1.2)),
    ("3690.HK", Quote::new(92.05, -0.8)),
    ("9868.HK", Quote::new(67.30, 3.5)),
];

/// Quote lookup against a fixed price table.
///
/// `symbol` is first resolved through the alias table (human-readable name
/// → ticker), falling back to the raw value.
pub struct MarketHandler {
    aliases: HashMap<String, String>,
    quotes: HashMap<String, Quote>,
}

impl MarketHandler {
    pub fn new(config: &MarketConfig) -> Self {
        let mut aliases: HashMap<String, String> = ALIASES
            .iter()
            .map(|(name, ticker)| (name.to_string(), ticker.to_string()))
            .collect();
        aliases.extend(config.aliases.clone());

        let mut quotes: HashMap<String, Quote> = QUOTES
            .iter()
            .map(|(ticker, quote)| (ticker.to_string(), *quote))
            .collect();
        quotes.extend(config.quotes.clone());

        Self { aliases, quotes }
    }

    /// Canonical ticker for `symbol`.
    pub fn resolve<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.aliases.get(symbol).map(String::as_str).unwrap_or(symbol)
    }

    pub fn quote(&self, symbol: &str) -> Option<Quote> {
        self.quotes.get(self.resolve(symbol)).copied()
    }
}

impl Default for MarketHandler {
    fn default() -> Self {
        Self::new(&MarketConfig::default())
    }
}

impl Handler for MarketHandler {
    fn handle(&self, params: &Params) -> HandlerResult {
        let symbol = params
            .get("symbol")
            .and_then(Value::as_str)
            .unwrap_or_default();
        debug!(symbol, ticker = self.resolve(symbol), "market query");

        Ok(match self.quote(symbol) {
            Some(q) => json!({ "price": q.price, "change": q.change }),
            None => domain_error("Unknown symbol"),
        })
    }
}
