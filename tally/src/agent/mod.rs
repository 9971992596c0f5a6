//! Single-node arithmetic agent.
//!
//! One node, `call_model`, wired between START and END. A turn invokes the
//! model once, appends its reply, and executes any requested tool calls
//! sequentially. There is no loop back to the model after tool execution.

mod call_model;

pub use call_model::{CallModelNode, SYSTEM_PROMPT};

use std::sync::Arc;

use crate::config::Context;
use crate::error::AgentError;
use crate::graph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use crate::llm::LlmClient;
use crate::state::AgentState;
use crate::tool_source::ToolSource;

/// Builds the agent graph: START → call_model → END.
pub fn build_graph(
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
) -> Result<CompiledStateGraph<AgentState>, CompilationError> {
    let mut graph = StateGraph::new();
    graph
        .add_node("call_model", Arc::new(CallModelNode::new(llm, tools)))
        .add_edge(START, "call_model")
        .add_edge("call_model", END);
    graph.compile()
}

/// Runs one turn of the agent over the given state.
///
/// Convenience wrapper: builds the graph, invokes it once, and returns the
/// updated state. Compilation failures surface as execution errors since the
/// graph shape is fixed here.
pub async fn run_turn(
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
    state: AgentState,
    context: Option<Context>,
) -> Result<AgentState, AgentError> {
    let graph = build_graph(llm, tools)
        .map_err(|e| AgentError::ExecutionFailed(format!("graph compilation failed: {}", e)))?;
    graph.invoke(state, context).await
}
