//! Minimal message types for agent state.
//!
//! Message roles: System (usually first in the list), User, Assistant, and Tool
//! for tool-execution results. Tool messages carry the id of the tool call they
//! answer so a reader can correlate request and result in the history.

/// A single message in the conversation.
///
/// Roles: system prompt, user input, assistant reply, tool result.
/// Tool messages are appended by the turn executor after the assistant
/// message that requested them, in request order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// System prompt; typically placed first in the message list.
    System(String),
    /// User input.
    User(String),
    /// Model/agent reply.
    Assistant(String),
    /// Result of one tool execution, correlated to the requesting call by id.
    Tool {
        /// Id of the tool call this result answers, when the model supplied one.
        call_id: Option<String>,
        /// Textual rendering of the computed value.
        content: String,
    },
}

impl Message {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    /// Creates a tool-result message.
    pub fn tool(call_id: Option<String>, content: impl Into<String>) -> Self {
        Self::Tool {
            call_id,
            content: content.into(),
        }
    }
}
