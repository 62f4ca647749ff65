//! Bridge from the local tool trait to rig-core's tool interface
//!
//! rig owns the tool-calling loop; this adapter only translates
//! definitions and call results across the boundary.

use rig::completion::ToolDefinition;
use rig::tool::{Tool as RigTool, ToolError};
use serde::Deserialize;
use std::sync::Arc;

use super::traits::Tool;

/// Arguments for tool calls (generic JSON)
#[derive(Deserialize)]
pub struct ToolArgs {
    #[serde(flatten)]
    pub args: serde_json::Value,
}

/// Adapter exposing a registry tool through rig's `Tool` trait
pub struct RigToolAdapter {
    /// The wrapped registry tool
    tool: Arc<dyn Tool>,
}

impl RigToolAdapter {
    /// Create a new adapter for a registry tool
    pub fn new(tool: Arc<dyn Tool>) -> Self {
        Self { tool }
    }
}

impl RigTool for RigToolAdapter {
    const NAME: &'static str = "bridged_tool";

    type Error = ToolError;
    type Args = ToolArgs;
    type Output = serde_json::Value;

    fn name(&self) -> String {
        self.tool.name().to_string()
    }

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: self.tool.name().to_string(),
            description: self.tool.description().to_string(),
            parameters: self.tool.parameters_schema(),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let result = self
            .tool
            .execute(args.args)
            .await
            .map_err(|e| ToolError::ToolCallError(Box::new(e)))?;

        if result.success {
            Ok(result
                .content
                .map(serde_json::Value::String)
                .unwrap_or(serde_json::Value::Null))
        } else {
            let message = result
                .error
                .unwrap_or_else(|| "tool execution failed".to_string());
            Err(ToolError::ToolCallError(message.into()))
        }
    }
}
