use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{domain_error, str_param};
use crate::error::ToolError;
use crate::registry::{Handler, HandlerResult, Params};

/// `list`, `read` and `exists` on the local filesystem.
///
/// A missing path is never a failure: `list` gives `[]`, `read` gives `""`,
/// `exists` gives `false`, also for a `path` that is not a string. I/O errors
/// on paths that do exist are.
pub struct FileHandler;

impl Handler for FileHandler {
    fn handle(&self, params: &Params) -> HandlerResult {
        let action = str_param(params, "action")?;
        let path = || str_param(params, "path").map(|p| Path::new(p.unwrap_or_default()));
        debug!(?action, "file operation");

        match action {
            Some("list") => list(path()?),
            Some("read") => read(path()?),
            Some("exists") => {
                let path = params.get("path").and_then(Value::as_str);
                Ok(Value::Bool(path.is_some_and(|p| Path::new(p).exists())))
            }
            _ => Ok(domain_error("Unknown action")),
        }
    }
}

fn list(path: &Path) -> HandlerResult {
    if !path.exists() {
        return Ok(json!([]));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| ToolError::io(path, e))? {
        let entry = entry.map_err(|e| ToolError::io(path, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    Ok(json!(names))
}

fn read(path: &Path) -> HandlerResult {
    if !path.is_file() {
        return Ok(json!(""));
    }

    let content = fs::read_to_string(path).map_err(|e| ToolError::io(path, e))?;
    Ok(Value::String(content))
}
