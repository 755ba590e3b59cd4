use serde::Serialize;
use serde_json::{json, Value};
use toolrelay_core::Tool;

/// Catalogue entry describing one tool and its parameters.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

pub fn list_tools() -> Vec<ToolDefinition> {
    Tool::ALL.into_iter().map(definition).collect()
}

pub fn definition(tool: Tool) -> ToolDefinition {
    let (description, input_schema) = match tool {
        Tool::Market => (
            "Look up the latest price and daily change for a ticker or market name",
            json!({
                "type": "object",
                "properties": {
                    "symbol": {
                        "type": "string",
                        "description": "Ticker (e.g. 9988.HK) or a known market name"
                    }
                },
                "required": ["symbol"]
            }),
        ),
        Tool::File => (
            "List a directory, read a text file, or test whether a path exists",
            json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["list", "read", "exists"]
                    },
                    "path": {
                        "type": "string",
                        "description": "Filesystem path"
                    }
                },
                "required": ["action", "path"]
            }),
        ),
        Tool::Calendar => (
            "List calendar events",
            json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["list", "today"]
                    }
                }
            }),
        ),
        Tool::Mail => (
            "List mailbox messages, optionally only unread ones",
            json!({
                "type": "object",
                "properties": {
                    "action": {
                        "type": "string",
                        "enum": ["list", "unread"]
                    }
                }
            }),
        ),
        Tool::Math => (
            "Evaluate an arithmetic expression (numbers, + - * /, parentheses); returns \"Error\" if it cannot be evaluated",
            json!({
                "type": "object",
                "properties": {
                    "expression": {
                        "type": "string",
                        "description": "Expression such as (1 + 2) * 3"
                    }
                },
                "required": ["expression"]
            }),
        ),
        Tool::Search => (
            "Search the web",
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search terms"
                    }
                },
                "required": ["query"]
            }),
        ),
    };

    ToolDefinition {
        name: tool.name(),
        description,
        input_schema,
    }
}
