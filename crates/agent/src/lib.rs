pub mod logging;
pub mod server;
pub mod tools;

pub use server::{announce, emit, AgentServer, LoopStats};
pub use tools::{list_tools, ToolDefinition};
