//! LLM client abstraction for the call_model node.
//!
//! CallModelNode depends on a callable that returns assistant text and optional
//! tool_calls; this module defines the trait, a mock implementation, and a
//! client for Ollama's OpenAI-compatible endpoint.

mod mock;
mod ollama;

pub use mock::MockLlm;
pub use ollama::ChatOllama;

use async_trait::async_trait;

use crate::error::AgentError;
use crate::message::Message;
use crate::state::ToolCall;

/// Response from an LLM completion: assistant message text and optional tool calls.
///
/// **Interaction**: Returned by `LlmClient::invoke()`; CallModelNode writes
/// `content` into a new assistant message and executes `tool_calls`.
pub struct LlmResponse {
    /// Assistant message content (plain text).
    pub content: String,
    /// Tool calls from this turn; empty means the turn ends after the message.
    pub tool_calls: Vec<ToolCall>,
}

/// LLM client: given messages, returns assistant text and optional tool_calls.
///
/// One blocking call per turn; a failure propagates and aborts the turn (no
/// retry, no timeout). Implementations: `MockLlm` (fixed response), `ChatOllama`
/// (real endpoint).
///
/// **Interaction**: Used by CallModelNode.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Invoke one turn: read messages, return assistant content and optional tool_calls.
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError>;
}
