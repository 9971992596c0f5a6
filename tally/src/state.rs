//! Agent state and tool-call types.
//!
//! AgentState holds the conversation history plus the tool calls from the
//! current turn; CallModelNode reads and writes these fields. ToolCall aligns
//! with the chat-completions wire format: `name` plus `arguments` as a JSON
//! string, with an optional correlation `id`.

use crate::message::Message;
use serde::{Deserialize, Serialize};

/// A single tool invocation requested by the LLM.
///
/// `arguments` is the raw JSON object string from the chat-completions
/// response; parsed once at dispatch. Optional `id` correlates the call with
/// the `Message::Tool` result appended to the history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    /// Tool name as registered in the tool source.
    pub name: String,
    /// Arguments as a JSON string; parsed when the tool is called.
    pub arguments: String,
    /// Optional id to match with the tool-result message.
    pub id: Option<String>,
}

/// State for the single-node agent graph.
///
/// Holds the conversation history plus the tool calls of the current turn.
/// The two integer fields are template placeholders carried through a turn
/// unchanged; the dispatch logic never reads them. Satisfies
/// `Clone + Send + Sync + Debug + 'static` for use with `Node<AgentState>`
/// and `StateGraph<AgentState>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentState {
    /// Conversation history (System, User, Assistant, Tool).
    pub messages: Vec<Message>,
    /// Tool calls from the latest assistant turn (written by CallModelNode).
    #[serde(default)]
    pub tool_calls: Vec<ToolCall>,
    /// Placeholder value from the template; passed through unchanged.
    #[serde(default = "default_changeme")]
    pub changeme: i32,
    /// Placeholder counter from the template; passed through unchanged.
    #[serde(default)]
    pub llm_calls: u32,
}

fn default_changeme() -> i32 {
    36
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            messages: vec![],
            tool_calls: vec![],
            changeme: 36,
            llm_calls: 0,
        }
    }
}

impl AgentState {
    /// Creates a state holding a single user message.
    pub fn with_user_message(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
            ..Self::default()
        }
    }

    /// Returns the content of the chronologically last Assistant message, if any.
    ///
    /// Semantics: last message in `messages` that is `Message::Assistant(content)`;
    /// empty content (assistant turn with only tool_calls) returns `Some("")`.
    /// Returns `None` only when there is no Assistant message at all.
    pub fn last_assistant_reply(&self) -> Option<String> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.clone()),
            _ => None,
        })
    }
}
