use crate::tools::ToolRegistry;
use serde_json::{Map, Value, json};

/// Decode the raw CLI argument into an argument object.
/// Missing, malformed, and non-object input all fall back to an empty map.
pub fn parse_args(raw: Option<&str>) -> Map<String, Value> {
    raw.and_then(|s| serde_json::from_str::<Value>(s).ok())
        .and_then(|v| match v {
            Value::Object(map) => Some(map),
            _ => None,
        })
        .unwrap_or_default()
}

/// Invoke a registered tool with the decoded arguments and serialize the
/// result to a single JSON line. Failures (including unknown tool names)
/// are rendered as an `{"error": ...}` payload rather than a process error.
pub fn run_tool(registry: &ToolRegistry, name: &str, raw: Option<&str>) -> String {
    let args = Value::Object(parse_args(raw));
    let result = registry
        .invoke(name, &args)
        .unwrap_or_else(|e| json!({ "error": e.to_string() }));
    result.to_string()
}
