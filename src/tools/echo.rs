use super::{Tool, ToolSpec};
use anyhow::Result;
use serde_json::{Value, json};

pub struct Echo;

// Strings are echoed verbatim; any other JSON value keeps its serialized form.
fn render_text(args: &Value) -> String {
    match args.get("text") {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl Tool for Echo {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "echo".into(),
            description: "Echo the provided text back as a content record".into(),
            parameters: json!({
                "type": "object",
                "properties": { "text": { "type": "string" } },
                "additionalProperties": true
            }),
            read_only: true,
        }
    }

    fn call(&self, args: &Value) -> Result<Value> {
        Ok(json!({ "content": format!("echo: {}", render_text(args)) }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_text() {
        let out = Echo.call(&json!({ "text": "hi" })).unwrap();
        assert_eq!(out, json!({ "content": "echo: hi" }));
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let out = Echo.call(&json!({})).unwrap();
        assert_eq!(out, json!({ "content": "echo: " }));
    }

    #[test]
    fn non_string_text_keeps_json_form() {
        let out = Echo.call(&json!({ "text": 5 })).unwrap();
        assert_eq!(out, json!({ "content": "echo: 5" }));

        let out = Echo.call(&json!({ "text": true })).unwrap();
        assert_eq!(out, json!({ "content": "echo: true" }));

        let out = Echo.call(&json!({ "text": [1, 2] })).unwrap();
        assert_eq!(out, json!({ "content": "echo: [1,2]" }));
    }

    #[test]
    fn output_has_exactly_one_key() {
        let out = Echo.call(&json!({ "text": "x", "extra": 1 })).unwrap();
        let obj = out.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj["content"].is_string());
    }
}
