//! The single `call_model` node: one LLM turn plus sequential tool dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::AgentError;
use crate::graph::{Next, Node};
use crate::llm::LlmClient;
use crate::message::Message;
use crate::state::AgentState;
use crate::tool_source::ToolSource;

/// System prompt prepended to every model invocation. It is never stored in
/// the conversation state.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant tasked with performing arithmetic.";

/// One conversational turn: invoke the model, record its reply, then execute
/// any requested tool calls in order and append their results.
///
/// The node does not loop back to the model after tool execution; results
/// land in the history and the turn ends. `changeme` and `llm_calls` pass
/// through untouched.
///
/// **Interaction**: Registered as the only node of the graph built by
/// [`build_graph`](crate::agent::build_graph); depends on the `LlmClient`
/// and `ToolSource` seams.
pub struct CallModelNode {
    llm: Arc<dyn LlmClient>,
    tools: Arc<dyn ToolSource>,
}

impl CallModelNode {
    pub fn new(llm: Arc<dyn LlmClient>, tools: Arc<dyn ToolSource>) -> Self {
        Self { llm, tools }
    }
}

#[async_trait]
impl Node<AgentState> for CallModelNode {
    fn id(&self) -> &str {
        "call_model"
    }

    async fn run(&self, mut state: AgentState) -> Result<(AgentState, Next), AgentError> {
        let mut request = Vec::with_capacity(state.messages.len() + 1);
        request.push(Message::system(SYSTEM_PROMPT));
        request.extend(state.messages.iter().cloned());

        debug!(message_count = request.len(), "invoking model");
        let response = self.llm.invoke(&request).await?;

        state.messages.push(Message::assistant(&response.content));
        state.tool_calls = response.tool_calls.clone();

        for call in &response.tool_calls {
            let arguments: serde_json::Value =
                serde_json::from_str(&call.arguments).map_err(|e| {
                    AgentError::ExecutionFailed(format!(
                        "malformed arguments for tool {}: {}",
                        call.name, e
                    ))
                })?;

            debug!(tool = %call.name, id = ?call.id, "executing tool call");
            let result = self
                .tools
                .call_tool(&call.name, arguments)
                .await
                .map_err(|e| {
                    warn!(tool = %call.name, error = %e, "tool call failed");
                    AgentError::ExecutionFailed(format!("tool {} failed: {}", call.name, e))
                })?;

            state
                .messages
                .push(Message::tool(call.id.clone(), result.text));
        }

        Ok((state, Next::Continue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use crate::state::ToolCall;
    use crate::tool_source::ArithmeticToolSource;

    fn node(llm: MockLlm) -> CallModelNode {
        CallModelNode::new(Arc::new(llm), Arc::new(ArithmeticToolSource::new()))
    }

    /// **Scenario**: No tool calls means exactly one new assistant message.
    #[tokio::test]
    async fn turn_without_tool_calls_appends_assistant_only() {
        let n = node(MockLlm::with_no_tool_calls("8"));
        let state = AgentState::with_user_message("What is 5 + 3?");
        let before = state.messages.len();
        let (after, next) = n.run(state).await.unwrap();
        assert_eq!(after.messages.len(), before + 1);
        assert_eq!(after.last_assistant_reply(), Some("8".to_string()));
        assert!(matches!(next, Next::Continue));
    }

    /// **Scenario**: A requested tool call is executed and its result appended
    /// after the assistant message, correlated by call id.
    #[tokio::test]
    async fn tool_call_result_appended_with_call_id() {
        let n = node(MockLlm::with_tool_call(
            "",
            "add",
            r#"{"a":5,"b":3}"#,
            "call-1",
        ));
        let (after, _) = n.run(AgentState::with_user_message("What is 5 + 3?"))
            .await
            .unwrap();
        match after.messages.last() {
            Some(Message::Tool { call_id, content }) => {
                assert_eq!(call_id.as_deref(), Some("call-1"));
                assert_eq!(content, "2", "add subtracts");
            }
            other => panic!("expected tool message, got {:?}", other),
        }
        assert_eq!(after.tool_calls.len(), 1);
    }

    /// **Scenario**: Multiple tool calls execute sequentially in request order.
    #[tokio::test]
    async fn multiple_tool_calls_execute_in_order() {
        let calls = vec![
            ToolCall {
                name: "multiply".into(),
                arguments: r#"{"a":4,"b":6}"#.into(),
                id: Some("call-1".into()),
            },
            ToolCall {
                name: "divide".into(),
                arguments: r#"{"a":10,"b":4}"#.into(),
                id: Some("call-2".into()),
            },
        ];
        let n = node(MockLlm::new("", calls));
        let (after, _) = n.run(AgentState::default()).await.unwrap();
        let tail: Vec<_> = after
            .messages
            .iter()
            .filter_map(|m| match m {
                Message::Tool { call_id, content } => {
                    Some((call_id.clone(), content.clone()))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            tail,
            vec![
                (Some("call-1".to_string()), "24".to_string()),
                (Some("call-2".to_string()), "2.5".to_string()),
            ]
        );
    }

    /// **Scenario**: Division by zero aborts the turn without appending a
    /// result for the failing call.
    #[tokio::test]
    async fn divide_by_zero_aborts_turn() {
        let n = node(MockLlm::with_tool_call(
            "",
            "divide",
            r#"{"a":10,"b":0}"#,
            "call-1",
        ));
        let err = n.run(AgentState::default()).await.unwrap_err();
        assert!(err.to_string().contains("division by zero"), "{}", err);
    }

    /// **Scenario**: Unknown tool name aborts the turn.
    #[tokio::test]
    async fn unknown_tool_aborts_turn() {
        let n = node(MockLlm::with_tool_call(
            "",
            "subtract",
            r#"{"a":5,"b":3}"#,
            "call-1",
        ));
        let err = n.run(AgentState::default()).await.unwrap_err();
        assert!(err.to_string().contains("subtract"), "{}", err);
    }

    /// **Scenario**: Malformed arguments JSON aborts the turn.
    #[tokio::test]
    async fn malformed_arguments_abort_turn() {
        let n = node(MockLlm::with_tool_call("", "add", "{not json", "call-1"));
        let err = n.run(AgentState::default()).await.unwrap_err();
        assert!(err.to_string().contains("malformed arguments"), "{}", err);
    }

    /// **Scenario**: Counters pass through the node unchanged.
    #[tokio::test]
    async fn counters_pass_through_unchanged() {
        let n = node(MockLlm::with_no_tool_calls("ok"));
        let state = AgentState::default();
        assert_eq!(state.changeme, 36);
        let (after, _) = n.run(state).await.unwrap();
        assert_eq!(after.changeme, 36);
        assert_eq!(after.llm_calls, 0);
    }

    /// **Scenario**: The system prompt is not written into the state history.
    #[tokio::test]
    async fn system_prompt_not_persisted() {
        let n = node(MockLlm::with_no_tool_calls("ok"));
        let (after, _) = n.run(AgentState::with_user_message("hi")).await.unwrap();
        assert!(!after
            .messages
            .iter()
            .any(|m| matches!(m, Message::System(_))));
    }
}
