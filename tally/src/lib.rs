//! # Tally
//!
//! A minimal single-node arithmetic agent built on a **state-in, state-out**
//! graph: one shared state type flows through nodes, and a turn is one pass
//! through the graph.
//!
//! ## Design principles
//!
//! - **Single state type**: The graph uses one state struct, [`AgentState`],
//!   that the node reads from and writes to.
//! - **One model call per turn**: [`CallModelNode`] invokes the model once,
//!   appends the assistant reply, then executes any requested tool calls in
//!   order. Results land in the history; there is no loop back to the model.
//! - **Seams over concretions**: The node depends on [`LlmClient`] and
//!   [`ToolSource`] traits; [`MockLlm`] and [`ArithmeticToolSource`] are the
//!   in-tree implementations, [`ChatOllama`] talks to a real endpoint.
//!
//! ## Main modules
//!
//! - [`graph`]: [`StateGraph`], [`CompiledStateGraph`], [`Node`], [`Next`] —
//!   build and run linear state graphs.
//! - [`agent`]: [`CallModelNode`], [`build_graph`], [`run_turn`] — the single
//!   arithmetic node and its wiring.
//! - [`state`]: [`AgentState`], [`ToolCall`].
//! - [`llm`]: [`LlmClient`] trait, [`MockLlm`], [`ChatOllama`].
//! - [`tool_source`]: [`ToolSource`], [`ToolSpec`], [`ArithmeticToolSource`].
//! - [`message`]: [`Message`] (System / User / Assistant / Tool).
//! - [`config`]: [`Context`] — runtime configuration passed to a graph run.
//!
//! Key types are re-exported at crate root:
//! `use tally::{AgentState, Message, StateGraph, run_turn};`
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tally::{run_turn, AgentState, ArithmeticToolSource, ChatOllama, ToolSource};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tools = Arc::new(ArithmeticToolSource::new());
//! let specs = tools.list_tools().await?;
//! let llm = Arc::new(ChatOllama::new("llama3.2:1b").with_tools(specs));
//!
//! let state = AgentState::with_user_message("What is 5 + 3?");
//! let after = run_turn(llm, tools, state, None).await?;
//! if let Some(reply) = after.last_assistant_reply() {
//!     println!("{}", reply);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod config;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod state;
pub mod tool_source;

pub use agent::{build_graph, run_turn, CallModelNode, SYSTEM_PROMPT};
pub use config::Context;
pub use error::AgentError;
pub use graph::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
    CompilationError, CompiledStateGraph, Next, Node, StateGraph, END, START,
};
pub use llm::{ChatOllama, LlmClient, LlmResponse, MockLlm};
pub use message::Message;
pub use state::{AgentState, ToolCall};
pub use tool_source::{
    ArithmeticToolSource, ToolCallContent, ToolSource, ToolSourceError, ToolSpec,
};
