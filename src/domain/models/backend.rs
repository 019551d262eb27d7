use anyhow::Result;
use async_trait::async_trait;

use super::ChatError;
use super::ChatReply;
use super::ChatRequest;

#[async_trait]
pub trait Backend {
    /// Used at startup to verify the API is reachable. A failure is surfaced as
    /// a notice and never stops the client.
    async fn health_check(&self) -> Result<()>;

    /// Sends one user message to the API and returns the validated reply.
    /// Non-2xx statuses and network errors are `ChatError::Transport`, an
    /// `error` field in a 2xx body is `ChatError::Logic`, and anything that
    /// does not match the response schema is `ChatError::MalformedResponse`.
    async fn send_chat(&self, request: ChatRequest) -> Result<ChatReply, ChatError>;
}

pub type BackendBox = Box<dyn Backend + Send + Sync>;
