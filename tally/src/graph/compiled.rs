//! Compiled state graph: immutable, supports invoke only.
//!
//! Built by `StateGraph::compile`. Holds nodes and the edge order derived from
//! explicit edges at compile time; runs from the first node and follows each
//! node's returned `Next`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::config::Context;
use crate::error::AgentError;

use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use super::state_graph::END;
use super::{Next, Node};

/// Compiled graph: immutable structure, supports invoke only.
///
/// Created by `StateGraph::compile()`. Runs from the first node; uses each
/// node's returned `Next` to choose the next node or stop.
#[derive(Clone)]
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// First node to run (from START).
    pub(super) first_node_id: String,
    /// Linear order of nodes, used for `Next::Continue`.
    pub(super) edge_order: Vec<String>,
    /// Map from node id to its unconditional successor.
    pub(super) next_map: HashMap<String, String>,
}

impl<S> CompiledStateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Runs the graph with the given state. Starts at the first node in edge
    /// order; after each node, uses the returned `Next` to continue the linear
    /// order, jump to a node, or end.
    ///
    /// `ctx` is threaded through for callers that carry run configuration; the
    /// current nodes do not read it.
    ///
    /// - `Next::Continue`: run the next node in edge order, or end if last.
    /// - `Next::Node(id)`: run the node with that id next.
    /// - `Next::End`: stop and return current state.
    pub async fn invoke(&self, state: S, ctx: Option<Context>) -> Result<S, AgentError> {
        if self.nodes.is_empty() || !self.nodes.contains_key(&self.first_node_id) {
            return Err(AgentError::ExecutionFailed("empty graph".into()));
        }
        let _ctx = ctx.unwrap_or_default();
        let mut state = state;
        let mut current_id = self.first_node_id.clone();

        log_graph_start();
        loop {
            let node = match self.nodes.get(&current_id) {
                Some(n) => n.clone(),
                None => {
                    let err =
                        AgentError::ExecutionFailed(format!("node not found: {}", current_id));
                    log_graph_error(&err);
                    return Err(err);
                }
            };

            log_node_start(&current_id);
            let (new_state, next) = match node.run(state.clone()).await {
                Ok(output) => output,
                Err(e) => {
                    log_graph_error(&e);
                    return Err(e);
                }
            };
            log_node_complete(&current_id, &next);
            state = new_state;

            let next_id: Option<String> = match next {
                Next::End => None,
                Next::Node(id) => Some(id),
                Next::Continue => self
                    .next_map
                    .get(&current_id)
                    .cloned()
                    .or_else(|| {
                        let pos = self.edge_order.iter().position(|x| x == &current_id)?;
                        self.edge_order.get(pos + 1).cloned()
                    }),
            };

            match next_id {
                None => break,
                Some(id) if id == END => break,
                Some(id) => current_id = id,
            }
        }
        log_graph_complete();
        Ok(state)
    }
}
