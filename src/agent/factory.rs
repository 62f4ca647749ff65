//! Process-wide agent factory
//!
//! The agent is constructed on first use and shared by every request
//! thereafter. The single-assignment cell keeps concurrent first callers
//! from racing into double construction; a failed construction leaves
//! the cell empty, so the configuration error resurfaces on each call
//! until the credential appears.

use tokio::sync::OnceCell;
use tracing::info;

use super::handle::ChatAgent;
use crate::config::Settings;
use crate::error::Result;
use crate::tools::{CurrentTimeTool, ToolRegistry};

/// Lazily-initialized holder of the one [`ChatAgent`] per process
pub struct AgentFactory {
    settings: Settings,
    cell: OnceCell<ChatAgent>,
}

impl AgentFactory {
    pub fn new(settings: Settings) -> Self {
        AgentFactory {
            settings,
            cell: OnceCell::new(),
        }
    }

    /// Get the cached agent, constructing it on first call.
    ///
    /// No network I/O happens here; a missing credential is rejected
    /// before any client exists.
    pub async fn get(&self) -> Result<&ChatAgent> {
        self.cell
            .get_or_try_init(|| async {
                let mut tools = ToolRegistry::new();
                tools.register(CurrentTimeTool);
                info!(tools = ?tools.names(), "constructing chat agent");
                ChatAgent::new(&self.settings, tools)
            })
            .await
    }
}
