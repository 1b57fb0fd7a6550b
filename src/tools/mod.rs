use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: Value,
    pub read_only: bool,
}

pub trait Tool {
    fn spec(&self) -> ToolSpec;
    fn call(&self, args: &Value) -> Result<Value>;
}

pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self { tools: vec![] }
    }

    pub fn with_default() -> Self {
        let mut reg = Self::new();
        reg.register(Box::new(echo::Echo));
        reg
    }

    pub fn register(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    pub fn list(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|t| t.spec()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .map(|t| t.as_ref())
            .find(|t| t.spec().name == name)
    }

    pub fn spec(&self, name: &str) -> Result<ToolSpec> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.into()))?;
        Ok(tool.spec())
    }

    pub fn invoke(&self, name: &str, args: &Value) -> Result<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.into()))?;
        tool.call(args)
    }
}

pub mod echo;
