//! State graph: nodes + explicit edges (from → to).
//!
//! Add nodes with `add_node`, define the chain with `add_edge(from, to)` using
//! `START` and `END` for graph entry/exit. Then `compile` to get a
//! `CompiledStateGraph`. Edges must form a single linear chain.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::CompiledStateGraph;
use crate::graph::node::Node;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus explicit edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge(from, to)`
/// (use `START` and `END` for entry/exit), then `compile()` to obtain an
/// executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Edges (from_id, to_id). Each node may have at most one outgoing edge.
    edges: Vec<(String, String)>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    ///
    /// Returns `&mut Self` for method chaining. The node is stored as
    /// `Arc<dyn Node<S>>`; use `add_edge` to include it in the chain.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    /// Adds an edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit. Both ids (except
    /// START/END) must be registered via `add_node` before `compile()`.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Builds the executable graph: validates that all edge node ids exist and
    /// edges form a single linear chain from START to END.
    ///
    /// Returns `CompilationError` if any edge references an unknown node or
    /// the chain is invalid. On success, the graph is immutable and ready for `invoke`.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            if from != START && !self.nodes.contains_key(from) {
                return Err(CompilationError::NodeNotFound(from.clone()));
            }
            if to != END && !self.nodes.contains_key(to) {
                return Err(CompilationError::NodeNotFound(to.clone()));
            }
        }

        let mut start_edges = self
            .edges
            .iter()
            .filter(|(f, _)| f == START)
            .map(|(_, t)| t.clone());
        let first = match (start_edges.next(), start_edges.next()) {
            (None, _) => return Err(CompilationError::MissingStart),
            (Some(first), None) => first,
            (Some(_), Some(_)) => {
                return Err(CompilationError::InvalidChain(
                    "multiple edges from START (branch)".into(),
                ))
            }
        };

        if !self.edges.iter().any(|(_, t)| t == END) {
            return Err(CompilationError::MissingEnd);
        }

        let non_start: Vec<_> = self
            .edges
            .iter()
            .filter(|(f, _)| f.as_str() != START)
            .collect();
        let edge_froms: HashSet<_> = non_start.iter().map(|(f, _)| f.clone()).collect();
        if edge_froms.len() != non_start.len() {
            return Err(CompilationError::InvalidChain(
                "duplicate from (branch)".into(),
            ));
        }

        let linear_next: HashMap<String, String> = non_start
            .iter()
            .map(|(f, t)| (f.clone(), t.clone()))
            .collect();

        // Walk the chain from the first node; any revisit is a cycle.
        let mut edge_order = vec![first.clone()];
        let mut current = first.clone();
        let mut visited = HashSet::new();
        visited.insert(current.clone());
        loop {
            let next = match linear_next.get(&current) {
                Some(n) => n.clone(),
                None => break,
            };
            if next == END {
                break;
            }
            if visited.contains(&next) {
                return Err(CompilationError::InvalidChain("cycle detected".into()));
            }
            visited.insert(next.clone());
            edge_order.push(next.clone());
            current = next;
        }

        Ok(CompiledStateGraph {
            nodes: self.nodes,
            first_node_id: first,
            edge_order,
            next_map: linear_next,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use crate::error::AgentError;
    use crate::graph::Next;

    #[derive(Clone, Debug)]
    #[allow(dead_code)]
    struct DummyState(i32);

    #[derive(Clone)]
    struct DummyNode(&'static str);

    #[async_trait]
    impl Node<DummyState> for DummyNode {
        fn id(&self) -> &str {
            self.0
        }
        async fn run(&self, state: DummyState) -> Result<(DummyState, Next), AgentError> {
            Ok((state, Next::Continue))
        }
    }

    /// **Scenario**: Compile fails when an edge references an unregistered node.
    #[test]
    fn compile_fails_on_unknown_node() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "missing");
        let result = graph.compile();
        match result {
            Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected NodeNotFound(missing), got {:?}", other.err()),
        }
    }

    /// **Scenario**: Compile fails without an edge from START.
    #[test]
    fn compile_fails_without_start_edge() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge("a", END);
        assert!(matches!(
            graph.compile(),
            Err(CompilationError::MissingStart)
        ));
    }

    /// **Scenario**: Compile fails without an edge to END.
    #[test]
    fn compile_fails_without_end_edge() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_edge(START, "a");
        assert!(matches!(graph.compile(), Err(CompilationError::MissingEnd)));
    }

    /// **Scenario**: Two edges from START is a branch and fails compilation.
    #[test]
    fn compile_fails_on_branch_from_start() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_node("b", Arc::new(DummyNode("b")));
        graph.add_edge(START, "a");
        graph.add_edge(START, "b");
        graph.add_edge("a", END);
        assert!(matches!(
            graph.compile(),
            Err(CompilationError::InvalidChain(_))
        ));
    }

    /// **Scenario**: Two outgoing edges from the same node is a branch and fails compilation.
    #[test]
    fn compile_fails_on_duplicate_from() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_node("b", Arc::new(DummyNode("b")));
        graph.add_node("c", Arc::new(DummyNode("c")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "b");
        graph.add_edge("a", "c");
        graph.add_edge("b", END);
        assert!(matches!(
            graph.compile(),
            Err(CompilationError::InvalidChain(_))
        ));
    }

    /// **Scenario**: A cycle in the chain fails compilation.
    #[test]
    fn compile_fails_on_cycle() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("a", Arc::new(DummyNode("a")));
        graph.add_node("b", Arc::new(DummyNode("b")));
        graph.add_edge(START, "a");
        graph.add_edge("a", "b");
        graph.add_edge("b", "a");
        // The chain never reaches END; the walk detects the revisit first.
        let result = graph.compile();
        assert!(matches!(
            result,
            Err(CompilationError::MissingEnd) | Err(CompilationError::InvalidChain(_))
        ));
    }

    /// **Scenario**: A valid single-node chain compiles.
    #[test]
    fn compile_single_node_chain() {
        let mut graph = StateGraph::<DummyState>::new();
        graph.add_node("only", Arc::new(DummyNode("only")));
        graph.add_edge(START, "only");
        graph.add_edge("only", END);
        assert!(graph.compile().is_ok());
    }
}
