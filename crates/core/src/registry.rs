use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::config::Config;
use crate::error::ToolError;
use crate::handlers::{
    CalendarHandler, FileHandler, MailHandler, MarketHandler, MathHandler, SearchHandler,
};

/// Parameters handed to a handler.
pub type Params = Map<String, Value>;

pub type HandlerResult = Result<Value, ToolError>;

/// The fixed set of tool kinds a command can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tool {
    Market,
    File,
    Calendar,
    Mail,
    Math,
    Search,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Market,
        Tool::File,
        Tool::Calendar,
        Tool::Mail,
        Tool::Math,
        Tool::Search,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Market => "market",
            Tool::File => "file",
            Tool::Calendar => "calendar",
            Tool::Mail => "mail",
            Tool::Math => "math",
            Tool::Search => "search",
        }
    }

    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tool implementation.
///
/// `Err` is a failure of the call itself and becomes a response-level error.
/// Domain problems (unknown symbol, unsupported action) are returned as
/// `Ok` payloads carrying an `error` field.
pub trait Handler: Send + Sync {
    fn handle(&self, params: &Params) -> HandlerResult;
}

impl<F> Handler for F
where
    F: Fn(&Params) -> HandlerResult + Send + Sync,
{
    fn handle(&self, params: &Params) -> HandlerResult {
        self(params)
    }
}

/// Tool → handler table. Built once at startup, read-only afterwards.
pub struct Registry {
    handlers: BTreeMap<Tool, Box<dyn Handler>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All six built-in handlers, configured from `config`.
    pub fn with_defaults(config: &Config) -> Self {
        Self::builder()
            .register(Tool::Market, MarketHandler::new(&config.market))
            .register(Tool::File, FileHandler)
            .register(Tool::Calendar, CalendarHandler::default())
            .register(Tool::Mail, MailHandler::default())
            .register(Tool::Math, MathHandler)
            .register(Tool::Search, SearchHandler::new(&config.search))
            .build()
    }

    pub fn get(&self, tool: Tool) -> Option<&dyn Handler> {
        self.handlers.get(&tool).map(|h| h.as_ref())
    }

    /// Resolve a tool name to its registered handler.
    pub fn lookup(&self, name: &str) -> Option<(Tool, &dyn Handler)> {
        let tool = Tool::from_name(name)?;
        self.get(tool).map(|h| (tool, h))
    }

    pub fn tools(&self) -> impl Iterator<Item = Tool> + '_ {
        self.handlers.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults(&Config::default())
    }
}

#[derive(Default)]
pub struct RegistryBuilder {
    handlers: BTreeMap<Tool, Box<dyn Handler>>,
}

impl RegistryBuilder {
    /// Register `handler` for `tool`, replacing any earlier registration.
    pub fn register(mut self, tool: Tool, handler: impl Handler + 'static) -> Self {
        self.handlers.insert(tool, Box::new(handler));
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            handlers: self.handlers,
        }
    }
}
