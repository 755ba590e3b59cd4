use serde::Serialize;

use crate::error::ToolError;
use crate::registry::{Handler, HandlerResult, Params};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub time: String,
}

impl CalendarEvent {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            time: time.into(),
        }
    }
}

/// Fixed agenda. `list`, `today` and any other action all return it.
pub struct CalendarHandler {
    events: Vec<CalendarEvent>,
}

impl CalendarHandler {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }
}

impl Default for CalendarHandler {
    fn default() -> Self {
        Self::new(vec![
            CalendarEvent::new("团队周会", "周一 10:00"),
            CalendarEvent::new("项目汇报", "周三 14:00"),
        ])
    }
}

impl Handler for CalendarHandler {
    fn handle(&self, _params: &Params) -> HandlerResult {
        serde_json::to_value(&self.events).map_err(|e| ToolError::Failed(e.to_string()))
    }
}
