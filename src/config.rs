//! Runtime configuration read from the process environment

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::agent::DEFAULT_MAX_STEPS;
use crate::core::{TutorError, TutorResult};
use crate::llm::openai::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::tools::DEFAULT_MAX_RESULTS;

/// Number of turns sent to the agent, system prompt included
pub const DEFAULT_WINDOW_SIZE: usize = 10;

/// Smallest window that still carries the latest user turn
pub const MIN_WINDOW_SIZE: usize = 2;

pub const DEFAULT_THREAD_ID: &str = "conversation_1";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Everything the tutor needs at startup
#[derive(Clone)]
pub struct TutorConfig {
    pub openai_api_key: String,
    pub model: String,
    pub openai_base_url: String,
    pub max_tokens: Option<u32>,
    pub tavily_api_key: String,
    pub search_max_results: usize,
    pub window_size: usize,
    pub max_steps: u32,
    pub thread_id: String,
    pub log_dir: PathBuf,
}

impl TutorConfig {
    /// Create configuration from environment variables
    ///
    /// Reads from:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_MODEL` (optional, defaults to gpt-4-turbo-preview)
    /// - `OPENAI_BASE_URL` (optional)
    /// - `OPENAI_MAX_TOKENS` (optional)
    /// - `TAVILY_API_KEY` (required)
    /// - `TAVILY_MAX_RESULTS` (optional, defaults to 2)
    /// - `TUTOR_WINDOW_SIZE` (optional, defaults to 10, at least 2)
    /// - `TUTOR_MAX_STEPS` (optional, defaults to 25, at least 1)
    /// - `TUTOR_THREAD_ID` (optional, defaults to conversation_1)
    /// - `TUTOR_LOG_DIR` (optional, defaults to logs)
    pub fn from_env() -> TutorResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> TutorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let required = |key: &str| {
            get(key).ok_or_else(|| TutorError::MissingCredential(key.to_string()))
        };

        let config = Self {
            openai_api_key: required("OPENAI_API_KEY")?,
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            max_tokens: get("OPENAI_MAX_TOKENS")
                .map(|v| parse_number("OPENAI_MAX_TOKENS", &v))
                .transpose()?,
            tavily_api_key: required("TAVILY_API_KEY")?,
            search_max_results: parse_or("TAVILY_MAX_RESULTS", get("TAVILY_MAX_RESULTS"), DEFAULT_MAX_RESULTS)?,
            window_size: parse_or("TUTOR_WINDOW_SIZE", get("TUTOR_WINDOW_SIZE"), DEFAULT_WINDOW_SIZE)?,
            max_steps: parse_or("TUTOR_MAX_STEPS", get("TUTOR_MAX_STEPS"), DEFAULT_MAX_STEPS)?,
            thread_id: get("TUTOR_THREAD_ID").unwrap_or_else(|| DEFAULT_THREAD_ID.to_string()),
            log_dir: get("TUTOR_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> TutorResult<()> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(TutorError::invalid_config(format!(
                "TUTOR_WINDOW_SIZE must be at least {}, got {}",
                MIN_WINDOW_SIZE, self.window_size
            )));
        }
        if self.max_steps == 0 {
            return Err(TutorError::invalid_config("TUTOR_MAX_STEPS must be at least 1"));
        }
        if self.search_max_results == 0 {
            return Err(TutorError::invalid_config("TAVILY_MAX_RESULTS must be at least 1"));
        }
        Ok(())
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> TutorResult<T> {
    value
        .trim()
        .parse()
        .map_err(|_| TutorError::invalid_config(format!("{} is not a valid number: {:?}", key, value)))
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> TutorResult<T> {
    match value {
        Some(v) => parse_number(key, &v),
        None => Ok(default),
    }
}

// Keep credentials out of logs
impl std::fmt::Debug for TutorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TutorConfig")
            .field("model", &self.model)
            .field("openai_base_url", &self.openai_base_url)
            .field("max_tokens", &self.max_tokens)
            .field("search_max_results", &self.search_max_results)
            .field("window_size", &self.window_size)
            .field("max_steps", &self.max_steps)
            .field("thread_id", &self.thread_id)
            .field("log_dir", &self.log_dir)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const CREDENTIALS: &[(&str, &str)] = &[("OPENAI_API_KEY", "sk-test"), ("TAVILY_API_KEY", "tvly-test")];

    #[test]
    fn test_defaults() {
        let config = TutorConfig::from_lookup(lookup(CREDENTIALS)).unwrap();
        assert_eq!(config.model, "gpt-4-turbo-preview");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.max_tokens, None);
        assert_eq!(config.search_max_results, 2);
        assert_eq!(config.window_size, 10);
        assert_eq!(config.max_steps, 25);
        assert_eq!(config.thread_id, "conversation_1");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_missing_credentials() {
        let err = TutorConfig::from_lookup(lookup(&[("TAVILY_API_KEY", "tvly-test")])).unwrap_err();
        assert!(matches!(err, TutorError::MissingCredential(ref k) if k == "OPENAI_API_KEY"));

        let err = TutorConfig::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test"), ("TAVILY_API_KEY", " ")]))
            .unwrap_err();
        assert!(matches!(err, TutorError::MissingCredential(ref k) if k == "TAVILY_API_KEY"));
    }

    #[test]
    fn test_overrides() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.extend([
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("OPENAI_MAX_TOKENS", "512"),
            ("TUTOR_WINDOW_SIZE", "6"),
            ("TUTOR_THREAD_ID", "lesson-7"),
        ]);
        let config = TutorConfig::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.window_size, 6);
        assert_eq!(config.thread_id, "lesson-7");
    }

    #[test]
    fn test_rejects_degenerate_window() {
        for size in ["0", "1"] {
            let mut pairs = CREDENTIALS.to_vec();
            pairs.push(("TUTOR_WINDOW_SIZE", size));
            let err = TutorConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, TutorError::InvalidConfig(_)));
        }
    }

    #[test]
    fn test_rejects_zero_budgets() {
        for key in ["TUTOR_MAX_STEPS", "TAVILY_MAX_RESULTS"] {
            let mut pairs = CREDENTIALS.to_vec();
            pairs.push((key, "0"));
            let err = TutorConfig::from_lookup(lookup(&pairs)).unwrap_err();
            assert!(matches!(err, TutorError::InvalidConfig(ref msg) if msg.contains(key)));
        }
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("TUTOR_MAX_STEPS", "lots"));
        let err = TutorConfig::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(err.to_string().contains("TUTOR_MAX_STEPS"));
    }

    #[test]
    fn test_debug_hides_keys() {
        let config = TutorConfig::from_lookup(lookup(CREDENTIALS)).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-test"));
        assert!(!debug.contains("tvly-test"));
    }
}
