//! OpenAI chat-completions client
//!
//! Direct HTTP client for OpenAI-compatible `/chat/completions` endpoints,
//! translating between the tutor's [`Turn`] list and the wire format.
//!
//! ```ignore
//! let llm = OpenAiProvider::new("sk-...")
//!     .with_model("gpt-4-turbo-preview")
//!     .with_max_tokens(1024);
//! ```

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::provider::LlmProvider;
use super::types::{ChatResponse, FinishReason, Role, ToolCall, ToolDefinition, Turn, Usage};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<OpenAiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<OpenAiToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiToolCall {
    #[serde(default)]
    id: Option<String>,
    #[serde(rename = "type", default = "function_type")]
    call_type: String,
    function: OpenAiFunctionCall,
}

fn function_type() -> String {
    "function".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OpenAiFunctionCall {
    name: String,
    /// JSON-encoded arguments
    #[serde(default)]
    arguments: String,
}

#[derive(Debug, Serialize)]
struct OpenAiTool {
    #[serde(rename = "type")]
    tool_type: String,
    function: OpenAiFunction,
}

#[derive(Debug, Serialize)]
struct OpenAiFunction {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

// ============================================================================
// OpenAiProvider
// ============================================================================

/// OpenAI-compatible LLM provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: Option<u32>,
    api_base: String,
}

impl OpenAiProvider {
    /// Create a new provider with a specific API key and the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Set the model to use
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Cap the number of completion tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Point at a different OpenAI-compatible API base (proxy, gateway, local server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    // ========================================================================
    // Format conversion
    // ========================================================================

    fn convert_turn(turn: &Turn) -> OpenAiMessage {
        let tool_calls = if turn.has_tool_calls() {
            Some(
                turn.tool_calls
                    .iter()
                    .map(|call| OpenAiToolCall {
                        id: Some(call.id.clone()),
                        call_type: function_type(),
                        function: OpenAiFunctionCall {
                            name: call.name.clone(),
                            arguments: serde_json::to_string(&call.arguments)
                                .unwrap_or_else(|_| "{}".to_string()),
                        },
                    })
                    .collect(),
            )
        } else {
            None
        };

        // Assistant turns that only call tools carry null content
        let content = if turn.content.is_empty() && tool_calls.is_some() {
            None
        } else {
            Some(turn.content.clone())
        };

        OpenAiMessage {
            role: turn.role.as_str().to_string(),
            content,
            tool_calls,
            tool_call_id: turn.tool_call_id.clone(),
        }
    }

    fn convert_tools(tools: &[ToolDefinition]) -> Option<Vec<OpenAiTool>> {
        if tools.is_empty() {
            return None;
        }

        Some(
            tools
                .iter()
                .map(|tool| OpenAiTool {
                    tool_type: function_type(),
                    function: OpenAiFunction {
                        name: tool.name.clone(),
                        description: tool.description.clone(),
                        parameters: tool.parameters.clone(),
                    },
                })
                .collect(),
        )
    }

    fn build_request(
        &self,
        messages: &[Turn],
        tools: &[ToolDefinition],
        session_id: Option<&str>,
    ) -> OpenAiRequest {
        OpenAiRequest {
            model: self.model.clone(),
            messages: messages.iter().map(Self::convert_turn).collect(),
            tools: Self::convert_tools(tools),
            max_tokens: self.max_tokens,
            user: session_id.map(str::to_string),
        }
    }

    fn convert_response(response: OpenAiResponse) -> Result<ChatResponse> {
        let choice = response
            .choices
            .into_iter()
            .next()
            .context("No choices in OpenAI response")?;

        let tool_calls: Vec<ToolCall> = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .filter(|call| !call.function.name.is_empty())
            .map(|call| {
                let arguments = serde_json::from_str(&call.function.arguments)
                    .unwrap_or_else(|_| Value::Object(Default::default()));
                ToolCall {
                    id: call
                        .id
                        .unwrap_or_else(|| format!("call_{}", uuid::Uuid::new_v4().simple())),
                    name: call.function.name,
                    arguments,
                }
            })
            .collect();

        let content = choice.message.content.unwrap_or_default();
        let turn = if tool_calls.is_empty() {
            Turn::assistant(content)
        } else {
            Turn::assistant_with_tool_calls(content, tool_calls)
        };

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(ChatResponse {
            turn,
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_api),
            usage,
        })
    }

    // ========================================================================
    // API methods
    // ========================================================================

    async fn send_request(&self, request: &OpenAiRequest) -> Result<OpenAiResponse> {
        let request_json =
            serde_json::to_string(request).context("Failed to serialize OpenAI request")?;
        tracing::debug!("[OpenAI] Request JSON: {}", request_json);

        let response = self
            .client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .body(request_json)
            .send()
            .await
            .context("Failed to send request to OpenAI API")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read OpenAI response body")?;

        tracing::debug!("[OpenAI] Response status: {}", status);
        tracing::debug!("[OpenAI] Response body: {}", response_text);

        if !status.is_success() {
            tracing::error!("[OpenAI] API error: {} - {}", status, response_text);
            anyhow::bail!("OpenAI API error ({}): {}", status, response_text);
        }

        serde_json::from_str(&response_text).context("Failed to parse OpenAI API response")
    }
}

#[async_trait::async_trait]
impl LlmProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: Vec<Turn>,
        tools: Vec<ToolDefinition>,
        session_id: Option<&str>,
    ) -> Result<ChatResponse> {
        tracing::info!("[OpenAI] Sending {} messages to {}", messages.len(), self.model);
        tracing::debug!("[OpenAI] Tools count: {}", tools.len());

        let request = self.build_request(&messages, &tools, session_id);
        let response = self.send_request(&request).await?;
        let response = Self::convert_response(response)?;

        tracing::info!(
            "[OpenAI] Reply: finish_reason={:?}, tool_calls={}, tokens in/out={}/{}",
            response.finish_reason,
            response.turn.tool_calls.len(),
            response.usage.input_tokens,
            response.usage.output_tokens
        );

        Ok(response)
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
