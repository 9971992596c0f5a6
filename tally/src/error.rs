//! Agent execution error type.
//!
//! Used by `Node::run`, `LlmClient::invoke`, and `CompiledStateGraph::invoke`.

use thiserror::Error;

/// Agent execution error.
///
/// Returned when a graph step fails. Single variant: LLM failures and tool
/// failures alike carry their diagnostic as a message, and none are retried
/// or recovered; the turn aborts.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Execution failed with a message (e.g. LLM call failed, tool error).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Display format of ExecutionFailed contains "execution failed" and the message.
    #[test]
    fn agent_error_display_execution_failed() {
        let err = AgentError::ExecutionFailed("msg".to_string());
        let s = err.to_string();
        assert!(
            s.contains("execution failed"),
            "Display should contain 'execution failed': {}",
            s
        );
        assert!(s.contains("msg"), "Display should contain message: {}", s);
    }
}
