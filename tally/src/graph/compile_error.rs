//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when edges reference unknown nodes or
//! do not form a single linear chain from START to END.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Validation ensures every id in edges (except START/END) exists in the node
/// map and edges form exactly one linear chain from START to END.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge was not registered via `add_node` (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge has from_id == START.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// No edge has to_id == END.
    #[error("graph must have exactly one edge to END")]
    MissingEnd,

    /// Edges do not form a single linear chain (e.g. branch, cycle, duplicate from).
    #[error("edges must form a single linear chain from START to END: {0}")]
    InvalidChain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display of NodeNotFound contains "node not found" and the node id.
    #[test]
    fn compilation_error_display_node_not_found() {
        let err = CompilationError::NodeNotFound("x".to_string());
        let s = err.to_string();
        assert!(s.contains("node not found"), "{}", s);
        assert!(s.contains("x"), "{}", s);
    }

    /// **Scenario**: MissingStart / MissingEnd mention START / END.
    #[test]
    fn compilation_error_display_missing_start_end() {
        assert!(CompilationError::MissingStart
            .to_string()
            .to_lowercase()
            .contains("start"));
        assert!(CompilationError::MissingEnd
            .to_string()
            .to_lowercase()
            .contains("end"));
    }

    /// **Scenario**: Display of InvalidChain contains the chain message and the reason.
    #[test]
    fn compilation_error_display_invalid_chain() {
        let err = CompilationError::InvalidChain("reason".to_string());
        let s = err.to_string();
        assert!(s.contains("linear chain"), "{}", s);
        assert!(s.contains("reason"), "{}", s);
    }
}
