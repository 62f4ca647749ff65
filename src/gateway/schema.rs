//! Wire schema for the chat gateway

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::Message;

/// Chat request body: conversation history, oldest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Full conversation as the client sees it
    pub messages: Vec<Message>,
    /// Opts the request into per-conversation memory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<Uuid>,
}

/// Chat response body: the assistant's reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: Message,
}

/// Health probe payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub name: String,
    pub status: String,
    pub env: String,
}
