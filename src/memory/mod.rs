//! Per-conversation memory
//!
//! The chat agent is a process-wide singleton, so conversational context
//! is never kept on the agent itself: it is scoped by conversation id in
//! a bounded TTL cache. Requests without a conversation id are served
//! statelessly and leave no trace here. Nothing is persisted.

use moka::future::Cache;
use std::time::Duration;
use uuid::Uuid;

/// One prompt/reply pair retained for a conversation
#[derive(Debug, Clone)]
pub struct Exchange {
    /// Text forwarded to the agent
    pub prompt: String,
    /// Text the agent replied with
    pub reply: String,
}

/// Most exchanges retained per conversation; older ones are dropped
const MAX_EXCHANGES: usize = 20;

/// In-process conversation memory
#[derive(Clone)]
pub struct ConversationMemory {
    /// conversation id -> exchanges, oldest first
    exchanges: Cache<Uuid, Vec<Exchange>>,
}

impl Default for ConversationMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationMemory {
    /// Create a new memory with default bounds
    pub fn new() -> Self {
        ConversationMemory {
            exchanges: Cache::builder()
                .max_capacity(512)
                .time_to_live(Duration::from_secs(30 * 60)) // 30 min TTL
                .build(),
        }
    }

    /// Prior exchanges for a conversation, oldest first
    pub async fn history(&self, id: Uuid) -> Vec<Exchange> {
        self.exchanges.get(&id).await.unwrap_or_default()
    }

    /// Append one exchange to a conversation.
    ///
    /// Read-modify-write: concurrent writers to the same id race and the
    /// last writer wins.
    pub async fn record(&self, id: Uuid, prompt: String, reply: String) {
        let mut history = self.history(id).await;
        history.push(Exchange { prompt, reply });
        if history.len() > MAX_EXCHANGES {
            let excess = history.len() - MAX_EXCHANGES;
            history.drain(..excess);
        }
        self.exchanges.insert(id, history).await;
    }
}
