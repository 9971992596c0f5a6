//! Tool source abstraction: list tools and call a tool.
//!
//! The turn executor depends on `ToolSource` instead of a concrete registry;
//! the one implementation here is [`ArithmeticToolSource`], a fixed three-entry
//! table of arithmetic functions.

mod arithmetic;

pub use arithmetic::{add, divide, multiply, ArithmeticToolSource};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Tool specification handed to the LLM as a callable signature.
///
/// **Interaction**: Returned by `ToolSource::list_tools()`; consumed by
/// `ChatOllama::with_tools` to declare the functions to the model.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolSpec {
    /// Tool name (the key the model uses in tool_calls).
    pub name: String,
    /// Human-readable description for the LLM.
    pub description: Option<String>,
    /// JSON Schema for arguments.
    pub input_schema: Value,
}

/// Result of a single tool call.
///
/// **Interaction**: Returned by `ToolSource::call_tool()`; CallModelNode wraps
/// this in a `Message::Tool` appended to the history.
#[derive(Debug, Clone)]
pub struct ToolCallContent {
    /// Textual rendering of the computed value.
    pub text: String,
}

/// Errors from listing or calling tools.
///
/// All three are fatal for the turn: the executor maps them to `AgentError`
/// and aborts without appending a result for the failing call.
#[derive(Debug, Error)]
pub enum ToolSourceError {
    /// The requested name has no entry in the registry.
    #[error("tool not found: {0}")]
    NotFound(String),
    /// An argument was missing or could not be coerced to an integer.
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
    /// divide was called with b == 0.
    #[error("division by zero")]
    DivisionByZero,
}

/// Tool source: list tools and call a tool.
///
/// The turn executor depends on this seam instead of a concrete registry:
/// `list_tools()` declares signatures to the model, `call_tool(name, args)`
/// dispatches one requested invocation.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// List available tools.
    async fn list_tools(&self) -> Result<Vec<ToolSpec>, ToolSourceError>;

    /// Call a tool by name with JSON arguments.
    async fn call_tool(
        &self,
        name: &str,
        arguments: Value,
    ) -> Result<ToolCallContent, ToolSourceError>;
}
