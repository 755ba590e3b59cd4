//! Wire model: one JSON command per input line, one JSON response per output line.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::DispatchError;

/// A decoded input line.
///
/// `id` is opaque and echoed back untouched; absent and `null` are the same.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Command {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub params: Option<Map<String, Value>>,
}

impl Command {
    pub fn new(id: Option<Value>, command: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            id,
            command: Some(command.into()),
            params: Some(params),
        }
    }

    /// The command string as shown in error messages.
    pub fn command_label(&self) -> &str {
        self.command.as_deref().unwrap_or("null")
    }
}

/// Outcome of decoding one line.
#[derive(Debug)]
pub enum Decoded {
    Command(Command),
    /// Well-formed JSON that does not have the shape of a command.
    Invalid {
        id: Option<Value>,
        error: DispatchError,
    },
}

/// Decode one input line. `None` means the line is not JSON at all and must be dropped.
pub fn decode_line(line: &str) -> Option<Decoded> {
    let value: Value = serde_json::from_str(line.trim()).ok()?;
    let id = value.get("id").filter(|v| !v.is_null()).cloned();

    if !value.is_object() {
        return Some(Decoded::Invalid {
            id,
            error: DispatchError::InvalidCommand("expected a JSON object".to_string()),
        });
    }

    match serde_json::from_value::<Command>(value) {
        Ok(command) => Some(Decoded::Command(command)),
        Err(e) => Some(Decoded::Invalid {
            id,
            error: DispatchError::InvalidCommand(e.to_string()),
        }),
    }
}

/// Exactly one of `result` / `error` is set; `id` is always written, `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Serialize to a single line (no trailing newline).
    pub fn encode(&self) -> String {
        // Unreachable with `Value`/`String` fields; kept so the line stays a
        // well-formed response should a field type ever change.
        serde_json::to_string(self).unwrap_or_else(|e| {
            json!({ "id": self.id, "error": format!("failed to encode response: {}", e) })
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_command() {
        let line = r#"{"id":1,"command":"market.query","params":{"symbol":"XAUUSD"}}"#;
        let Some(Decoded::Command(cmd)) = decode_line(line) else {
            panic!("expected a command");
        };
        assert_eq!(cmd.id, Some(json!(1)));
        assert_eq!(cmd.command.as_deref(), Some("market.query"));
        assert_eq!(cmd.params.unwrap()["symbol"], "XAUUSD");
    }

    #[test]
    fn missing_fields_default() {
        let Some(Decoded::Command(cmd)) = decode_line("{}") else {
            panic!("expected a command");
        };
        assert!(cmd.id.is_none());
        assert!(cmd.command.is_none());
        assert!(cmd.params.is_none());
        assert_eq!(cmd.command_label(), "null");
    }

    #[test]
    fn null_id_is_absent() {
        let Some(Decoded::Command(cmd)) = decode_line(r#"{"id":null,"command":"x"}"#) else {
            panic!("expected a command");
        };
        assert!(cmd.id.is_none());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let line = r#"{"id":"cmd-1","command":"mail.list","params":{},"timestamp":17}"#;
        assert!(matches!(decode_line(line), Some(Decoded::Command(_))));
    }

    #[test]
    fn non_json_is_dropped() {
        assert!(decode_line("not-json").is_none());
        assert!(decode_line("").is_none());
        assert!(decode_line("{\"id\":1,").is_none());
    }

    #[test]
    fn wrong_shape_keeps_id() {
        let Some(Decoded::Invalid { id, .. }) = decode_line(r#"{"id":7,"command":42}"#) else {
            panic!("expected an invalid command");
        };
        assert_eq!(id, Some(json!(7)));

        let Some(Decoded::Invalid { id, .. }) = decode_line("[1,2]") else {
            panic!("expected an invalid command");
        };
        assert!(id.is_none());
    }

    #[test]
    fn params_must_be_an_object() {
        let decoded = decode_line(r#"{"id":3,"command":"file.list","params":"x"}"#);
        assert!(matches!(decoded, Some(Decoded::Invalid { .. })));
    }

    #[test]
    fn success_encodes_id_then_result() {
        let resp = Response::success(Some(json!(1)), json!({"price": 102450.0, "change": 2.3}));
        assert_eq!(
            resp.encode(),
            r#"{"id":1,"result":{"price":102450.0,"change":2.3}}"#
        );
    }

    #[test]
    fn error_with_absent_id_encodes_null() {
        let resp = Response::error(None, "Unknown command: null");
        assert!(resp.is_error());
        assert_eq!(resp.encode(), r#"{"id":null,"error":"Unknown command: null"}"#);
    }

    #[test]
    fn encodes_unicode_verbatim() {
        let resp = Response::success(Some(json!("a")), json!("项目"));
        assert_eq!(resp.encode(), r#"{"id":"a","result":"项目"}"#);
    }
}
