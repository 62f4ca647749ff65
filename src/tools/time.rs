//! Current-time tool
//!
//! Lets the agent answer timezone questions with a live clock reading.

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use serde_json::Value;

use super::traits::{Tool, ToolResult};
use crate::error::Result;

/// Guidance returned for unresolvable timezone identifiers
const INVALID_TIMEZONE: &str = "Invalid timezone. Try 'UTC' or 'America/Los_Angeles'.";

/// Format the current instant for an IANA timezone identifier.
///
/// Never fails: anything unresolvable yields a fixed guidance string the
/// model can relay to the user.
pub fn current_time(timezone: &str) -> String {
    match timezone.parse::<Tz>() {
        Ok(tz) => Utc::now()
            .with_timezone(&tz)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
        Err(_) => INVALID_TIMEZONE.to_string(),
    }
}

/// Built-in tool: current date and time in a requested timezone
pub struct CurrentTimeTool;

#[async_trait]
impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "current_time"
    }

    fn description(&self) -> &str {
        "Return current time in the given timezone"
    }

    fn parameters_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "timezone": {
                    "type": "string",
                    "description": "IANA timezone identifier, e.g. 'UTC' or 'America/Los_Angeles'. Defaults to 'UTC'."
                }
            },
            "required": []
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolResult> {
        let timezone = args
            .get("timezone")
            .and_then(|v| v.as_str())
            .unwrap_or("UTC");
        Ok(ToolResult::success(current_time(timezone)))
    }
}
