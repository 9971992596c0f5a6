//! Ollama chat client implementing `LlmClient` (ChatOllama).
//!
//! Talks to Ollama's OpenAI-compatible Chat Completions endpoint
//! (default `http://localhost:11434/v1`). Optional tools can be set for
//! function/tool calling; when present, the model may return `tool_calls`
//! in the response.
//!
//! **Interaction**: Implements `LlmClient`; used by CallModelNode like `MockLlm`.
//! Depends on `async_openai` with a custom base URL.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::AgentError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;
use crate::state::ToolCall;
use crate::tool_source::ToolSpec;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionMessageToolCalls, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessage, ChatCompletionRequestToolMessage,
        ChatCompletionRequestToolMessageContent, ChatCompletionRequestUserMessage,
        ChatCompletionTool, ChatCompletionTools, CreateChatCompletionRequestArgs, FunctionObject,
    },
    Client,
};

/// Default base URL for a local Ollama server's OpenAI-compatible API.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

/// Default model; small enough to run locally.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2:1b";

/// Ollama Chat Completions client implementing `LlmClient`.
///
/// Uses the OpenAI-compatible endpoint exposed by Ollama; the API key is a
/// placeholder (Ollama ignores it). Optionally set tools (e.g. from
/// `ToolSource::list_tools()`) to enable tool_calls in the response.
///
/// **Interaction**: Implements `LlmClient`; used by CallModelNode.
pub struct ChatOllama {
    client: Client<OpenAIConfig>,
    model: String,
    tools: Option<Vec<ToolSpec>>,
}

impl ChatOllama {
    /// Build client for a local Ollama server with the given model.
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_OLLAMA_BASE_URL, model)
    }

    /// Build client with a custom base URL (e.g. a remote Ollama host).
    pub fn with_base_url(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_base(base_url.into())
            .with_api_key("ollama");
        Self {
            client: Client::with_config(config),
            model: model.into(),
            tools: None,
        }
    }

    /// Set tools for this completion (enables tool_calls in the response).
    pub fn with_tools(mut self, tools: Vec<ToolSpec>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Convert our `Message` list to chat request messages.
    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
                Message::Assistant(s) => {
                    ChatCompletionRequestMessage::Assistant((s.as_str()).into())
                }
                Message::Tool { call_id, content } => {
                    ChatCompletionRequestMessage::Tool(ChatCompletionRequestToolMessage {
                        content: ChatCompletionRequestToolMessageContent::Text(content.clone()),
                        tool_call_id: call_id.clone().unwrap_or_default(),
                    })
                }
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOllama {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, AgentError> {
        let request_messages = Self::messages_to_request(messages);
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(request_messages);

        if let Some(ref tools) = self.tools {
            let chat_tools: Vec<ChatCompletionTools> = tools
                .iter()
                .map(|t| {
                    ChatCompletionTools::Function(ChatCompletionTool {
                        function: FunctionObject {
                            name: t.name.clone(),
                            description: t.description.clone(),
                            parameters: Some(t.input_schema.clone()),
                            ..Default::default()
                        },
                    })
                })
                .collect();
            args.tools(chat_tools);
        }

        let request = args.build().map_err(|e| {
            AgentError::ExecutionFailed(format!("chat request build failed: {}", e))
        })?;

        let tools_count = self.tools.as_ref().map(|t| t.len()).unwrap_or(0);
        debug!(
            model = %self.model,
            message_count = messages.len(),
            tools_count = tools_count,
            "Ollama chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&request) {
            trace!(request = %js, "Ollama request body");
        }

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AgentError::ExecutionFailed(format!("Ollama API error: {}", e)))?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(response = %js, "Ollama response body");
        }

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            AgentError::ExecutionFailed("Ollama returned no choices".to_string())
        })?;

        let msg = choice.message;
        let content = msg.content.unwrap_or_default();
        let tool_calls: Vec<ToolCall> = msg
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .filter_map(|tc| {
                if let ChatCompletionMessageToolCalls::Function(f) = tc {
                    Some(ToolCall {
                        name: f.function.name,
                        arguments: f.function.arguments,
                        id: Some(f.id),
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(LlmResponse {
            content,
            tool_calls,
        })
    }
}
