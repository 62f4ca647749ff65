//! Chat agent handle - wrapper around the rig-core Gemini agent
//!
//! rig owns the completion protocol and the tool-dispatch loop; this
//! wrapper only assembles the agent and translates errors.

use rig::agent::Agent;
use rig::client::CompletionClient;
use rig::completion::{Message as RigMessage, Prompt};
use rig::providers::gemini;
use secrecy::ExposeSecret;
use tracing::debug;

use super::prompts::{AGENT_NAME, SYSTEM_PROMPT};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::memory::Exchange;
use crate::tools::{RigToolAdapter, ToolRegistry};

/// Model served by the Google AI Studio API
pub const MODEL: &str = "gemini-2.0-flash";

/// Upper bound on tool round trips within a single reply
pub const MAX_TOOL_TURNS: usize = 3;

/// Handle to the process-wide chat agent.
///
/// Construction performs no network I/O; the first model call happens on
/// the first [`ChatAgent::run`].
pub struct ChatAgent {
    agent: Agent<gemini::completion::CompletionModel>,
}

impl std::fmt::Debug for ChatAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatAgent").finish_non_exhaustive()
    }
}

impl ChatAgent {
    /// Build the agent from settings and a capability registry.
    ///
    /// Fails with a configuration error when the credential is absent,
    /// before any client is constructed.
    pub fn new(settings: &Settings, tools: ToolRegistry) -> Result<Self> {
        let api_key = settings.gemini_api_key.as_ref().ok_or_else(|| {
            Error::Config(
                "GEMINI_API_KEY is missing. Set it in your environment or .env file.".to_string(),
            )
        })?;

        let client = gemini::Client::new(api_key.expose_secret())
            .map_err(|e| Error::Config(format!("Failed to create Gemini client: {}", e)))?;

        let mut builder = client
            .agent(MODEL)
            .preamble(SYSTEM_PROMPT)
            .tools(Vec::new());
        for tool in tools.into_tools() {
            builder = builder.tool(RigToolAdapter::new(tool));
        }

        debug!(agent = AGENT_NAME, model = MODEL, "chat agent constructed");
        Ok(ChatAgent {
            agent: builder.build(),
        })
    }

    /// Run one prompt through the agent with prior exchanges as history.
    ///
    /// Blocks (asynchronously) on the model provider; the agent may take
    /// up to [`MAX_TOOL_TURNS`] tool round trips before replying.
    pub async fn run(&self, prompt: &str, prior: &[Exchange]) -> Result<String> {
        let mut history: Vec<RigMessage> = Vec::with_capacity(prior.len() * 2);
        for exchange in prior {
            history.push(RigMessage::user(exchange.prompt.clone()));
            history.push(RigMessage::assistant(exchange.reply.clone()));
        }

        self.agent
            .prompt(prompt)
            .with_history(&mut history)
            .max_turns(MAX_TOOL_TURNS)
            .await
            .map_err(|e| Error::Agent(e.to_string()))
    }
}
