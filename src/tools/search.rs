//! Tavily web search tool
//!
//! Lets the tutor look up current market facts instead of relying on the
//! model's training data. Needs a Tavily API key.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::tool::{Tool, ToolResult};
use crate::llm::ToolDefinition;

pub const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";
pub const DEFAULT_MAX_RESULTS: usize = 2;

const TOOL_NAME: &str = "tavily_search";
const TOOL_DESCRIPTION: &str = "A search engine optimized for comprehensive, accurate, and trusted results. \
Useful for when you need to answer questions about current events, market data or financial facts. \
Input should be a search query.";

#[derive(Debug, Deserialize)]
struct SearchInput {
    query: String,
}

#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
}

/// Web search backed by the Tavily search API
pub struct TavilySearchTool {
    client: Client,
    api_key: String,
    max_results: usize,
    endpoint: String,
}

impl TavilySearchTool {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            max_results: DEFAULT_MAX_RESULTS,
            endpoint: TAVILY_SEARCH_URL.to_string(),
        }
    }

    /// Number of results returned per query
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn search(&self, query: &str) -> Result<Vec<TavilyResult>> {
        let body = TavilyRequest {
            api_key: &self.api_key,
            query,
            max_results: self.max_results,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Tavily")?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!("[Tavily] API error: {} - {}", status, text);
            anyhow::bail!("Tavily Search API error ({}): {}", status, text);
        }

        let data: TavilyResponse = response
            .json()
            .await
            .context("Failed to parse Tavily response")?;

        Ok(data.results.into_iter().take(self.max_results).collect())
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        TOOL_NAME
    }

    fn description(&self) -> &str {
        TOOL_DESCRIPTION
    }

    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            TOOL_NAME,
            TOOL_DESCRIPTION,
            json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query to look up"
                    }
                },
                "required": ["query"]
            }),
        )
    }

    async fn execute(&self, input: &Value) -> Result<ToolResult> {
        let input: SearchInput = match serde_json::from_value(input.clone()) {
            Ok(input) => input,
            Err(e) => return Ok(ToolResult::error(format!("Invalid input: {}", e))),
        };

        tracing::info!("[Tavily] Searching: {}", input.query);

        let results = self.search(&input.query).await?;
        tracing::debug!("[Tavily] {} results", results.len());

        let output = json!({
            "query": input.query,
            "results": results,
        });

        Ok(ToolResult::success(serde_json::to_string_pretty(&output)?))
    }
}
