pub mod config;
pub mod error;
pub mod expr;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod router;
#[cfg(test)]
mod testutils;

pub use config::{Config, MarketConfig, Quote, SearchConfig};
pub use error::{ConfigError, DispatchError, ToolError};
pub use expr::{evaluate, ExprError, Number};
pub use protocol::{decode_line, Command, Decoded, Response};
pub use registry::{Handler, HandlerResult, Params, Registry, RegistryBuilder, Tool};
pub use router::{tool_segment, Router};
