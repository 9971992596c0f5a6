//! Mock LLM for tests and examples.
//!
//! Returns a fixed assistant message and optional fixed tool calls;
//! configurable "no tool_calls" to test the pass-through path.

use async_trait::async_trait;

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;

/// Mock LLM: fixed assistant text and optional tool_calls.
///
/// Configurable to return fixed tool calls (so the turn executor dispatches
/// them) or no tool calls (so the turn ends after the assistant message).
///
/// **Interaction**: Implements `LlmClient`; used by CallModelNode in tests.
pub struct MockLlm {
    /// Assistant message content to return.
    content: String,
    /// Tool calls to return.
    tool_calls: Vec<ToolCall>,
}

impl MockLlm {
    /// Creates a mock with custom content and tool_calls.
    pub fn new(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: content.into(),
            tool_calls,
        }
    }

    /// Creates a mock that returns assistant text and no tool_calls.
    pub fn with_no_tool_calls(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: vec![],
        }
    }

    /// Creates a mock that requests one tool call.
    pub fn with_tool_call(
        content: impl Into<String>,
        name: impl Into<String>,
        arguments: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            tool_calls: vec![ToolCall {
                name: name.into(),
                arguments: arguments.into(),
                id: Some(id.into()),
            }],
        }
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, _messages: &[Message]) -> Result<LlmResponse, AgentError> {
        Ok(LlmResponse {
            content: self.content.clone(),
            tool_calls: self.tool_calls.clone(),
        })
    }
}
