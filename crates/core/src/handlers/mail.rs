use serde::Serialize;

use super::str_param;
use crate::error::ToolError;
use crate::registry::{Handler, HandlerResult, Params};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub subject: String,
    pub unread: bool,
}

impl MailMessage {
    pub fn new(from: impl Into<String>, subject: impl Into<String>, unread: bool) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
            unread,
        }
    }
}

/// Fixed mailbox. `unread` filters on the unread flag; any other action returns everything.
pub struct MailHandler {
    messages: Vec<MailMessage>,
}

impl MailHandler {
    pub fn new(messages: Vec<MailMessage>) -> Self {
        Self { messages }
    }

    pub fn unread(&self) -> Vec<&MailMessage> {
        self.messages.iter().filter(|m| m.unread).collect()
    }
}

impl Default for MailHandler {
    fn default() -> Self {
        Self::new(vec![
            MailMessage::new("boss@company.com", "项目进度汇报", true),
            MailMessage::new("team@company.com", "本周会议纪要", false),
        ])
    }
}

impl Handler for MailHandler {
    fn handle(&self, params: &Params) -> HandlerResult {
        let value = match str_param(params, "action")? {
            Some("unread") => serde_json::to_value(self.unread()),
            _ => serde_json::to_value(&self.messages),
        };
        value.map_err(|e| ToolError::Failed(e.to_string()))
    }
}
