//! State graph: build a chain of nodes and run it state-in, state-out.
//!
//! - [`StateGraph`]: add nodes and edges (with [`START`] / [`END`] sentinels), then `compile`.
//! - [`CompiledStateGraph`]: immutable executable graph, supports `invoke`.
//! - [`Node`]: one step in a graph — state in, (state out, [`Next`]) out.
//! - [`CompilationError`]: validation failures from `compile`.

mod compile_error;
mod compiled;
mod logging;
mod next;
mod node;
mod state_graph;

pub use compile_error::CompilationError;
pub use compiled::CompiledStateGraph;
pub use logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
pub use next::Next;
pub use node::Node;
pub use state_graph::{StateGraph, END, START};
