use std::sync::Arc;

use finance_tutor::agent::{default_system_prompt, AgentConfig, ReactAgent};
use finance_tutor::cli::{Console, TutorSession};
use finance_tutor::core::TutorState;
use finance_tutor::helpers::LearningStateInjection;
use finance_tutor::llm::{LlmProvider, OpenAiProvider};
use finance_tutor::logging;
use finance_tutor::tools::{TavilySearchTool, ToolRegistry};
use finance_tutor::TutorConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TutorConfig::from_env()?;

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = logging::init_logging(&config.log_dir)?;

    tracing::info!("=== Finance Tutor Starting ===");
    tracing::debug!("Configuration: {:?}", config);

    let mut provider = OpenAiProvider::new(&config.openai_api_key)
        .with_model(&config.model)
        .with_base_url(&config.openai_base_url);
    if let Some(max_tokens) = config.max_tokens {
        provider = provider.with_max_tokens(max_tokens);
    }
    let llm: Arc<dyn LlmProvider> = Arc::new(provider);

    let mut tool_registry = ToolRegistry::new();
    tool_registry.register(
        TavilySearchTool::new(&config.tavily_api_key).with_max_results(config.search_max_results),
    );
    tracing::info!("Registered {} tools", tool_registry.len());

    let agent_config = AgentConfig::default()
        .with_tools(Arc::new(tool_registry))
        .with_injection(LearningStateInjection)
        .with_max_steps(config.max_steps);
    let agent = ReactAgent::new(llm, agent_config);

    let state = TutorState::new(default_system_prompt(), config.max_steps);
    let mut session = TutorSession::new(
        Arc::new(agent),
        Console::stdio(),
        state,
        config.window_size,
        config.thread_id.clone(),
    );

    session.run().await?;

    tracing::info!("=== Finance Tutor Shutting Down ===");

    Ok(())
}
