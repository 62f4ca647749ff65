//! Tool layer - capabilities the agent may invoke mid-reply
//!
//! Tools implement a local trait and are collected in a registry, the
//! explicit capability list handed to the agent at construction. The
//! bridge adapts them to rig's tool interface; rig decides when a tool
//! actually runs.

mod bridge;
mod registry;
mod time;
mod traits;

pub use bridge::RigToolAdapter;
pub use registry::ToolRegistry;
pub use time::{current_time, CurrentTimeTool};
pub use traits::{Tool, ToolResult};
