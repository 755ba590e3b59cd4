use serde_json::Value;
use tracing::debug;

use crate::error::DispatchError;
use crate::protocol::Command;
use crate::registry::{Params, Registry};

/// Routes a command to the handler named by its first dot segment.
///
/// Only the tool segment is used. The action verb, if any, is read by the
/// handler from `params.action`; the remainder of `command` is not forwarded.
pub struct Router {
    registry: Registry,
}

impl Router {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn dispatch(&self, command: &Command) -> Result<Value, DispatchError> {
        let resolved = command
            .command
            .as_deref()
            .map(tool_segment)
            .and_then(|name| self.registry.lookup(name));

        let Some((tool, handler)) = resolved else {
            return Err(DispatchError::UnknownCommand(
                command.command_label().to_string(),
            ));
        };

        debug!(%tool, command = command.command_label(), "dispatching");

        let empty = Params::new();
        let params = command.params.as_ref().unwrap_or(&empty);
        handler.handle(params).map_err(DispatchError::from)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Registry::default())
    }
}

/// The part of `command` before the first `.`, or all of it.
pub fn tool_segment(command: &str) -> &str {
    command.split_once('.').map_or(command, |(tool, _)| tool)
}
