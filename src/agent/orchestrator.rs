//! Chat orchestration - bridges validated requests to the cached agent
//!
//! The only local logic in the whole request path: pick the prompt,
//! fetch any per-conversation history, run the agent, record the
//! exchange. Every failure propagates unmodified; the HTTP boundary is
//! the single recovery point.

use tracing::debug;
use uuid::Uuid;

use super::factory::AgentFactory;
use super::types::{Message, Role};
use crate::error::{Error, Result};
use crate::memory::ConversationMemory;

/// Pick the prompt to forward: the most recent user message, or the
/// last message of any role when no user message exists.
fn select_prompt(messages: &[Message]) -> Result<&str> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .or_else(|| messages.last())
        .map(|m| m.content.as_str())
        .ok_or_else(|| Error::InvalidInput("conversation history is empty".to_string()))
}

/// Run one turn of the conversation through the agent.
pub async fn respond(
    factory: &AgentFactory,
    memory: &ConversationMemory,
    messages: &[Message],
    conversation_id: Option<Uuid>,
) -> Result<String> {
    let prompt = select_prompt(messages)?.to_string();
    let agent = factory.get().await?;

    let prior = match conversation_id {
        Some(id) => memory.history(id).await,
        None => Vec::new(),
    };
    debug!(prior = prior.len(), "dispatching prompt to agent");

    let reply = agent.run(&prompt, &prior).await?;

    if let Some(id) = conversation_id {
        memory.record(id, prompt, reply.clone()).await;
    }

    Ok(reply)
}
