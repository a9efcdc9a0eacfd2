// ABOUTME: Environment configuration for the LLM provider, logging, and calculation settings
// ABOUTME: Parses MACROFIT_* variables with defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::error::Error as StdError;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use macrofit_intelligence::config::{NutritionConfig, ShoppingConfig};
use tracing::info;

use crate::logging::LoggingConfig;

/// Base URL of the OpenAI-compatible endpoint
pub const LLM_BASE_URL_ENV: &str = "MACROFIT_LLM_BASE_URL";
/// API key for the endpoint (optional for local servers)
pub const LLM_API_KEY_ENV: &str = "MACROFIT_LLM_API_KEY";
/// Model name
pub const LLM_MODEL_ENV: &str = "MACROFIT_LLM_MODEL";
/// Sampling temperature
pub const LLM_TEMPERATURE_ENV: &str = "MACROFIT_LLM_TEMPERATURE";
/// Completion token limit
pub const LLM_MAX_TOKENS_ENV: &str = "MACROFIT_LLM_MAX_TOKENS";
/// Request timeout in seconds
pub const LLM_TIMEOUT_ENV: &str = "MACROFIT_LLM_TIMEOUT_SECS";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Low temperature keeps the JSON shape stable
const DEFAULT_TEMPERATURE: f32 = 0.1;
const DEFAULT_MAX_TOKENS: u32 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// LLM provider settings
#[derive(Debug, Clone, PartialEq)]
pub struct LlmConfig {
    /// Base URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// Bearer token, if the endpoint needs one
    pub api_key: Option<String>,
    /// Model name sent with each request
    pub model: String,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Maximum completion tokens
    pub max_tokens: u32,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl LlmConfig {
    /// Load LLM settings from `MACROFIT_LLM_*` variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: env_var_or(LLM_BASE_URL_ENV, DEFAULT_BASE_URL),
            api_key: env::var(LLM_API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty()),
            model: env_var_or(LLM_MODEL_ENV, DEFAULT_MODEL),
            temperature: parse_env_or(LLM_TEMPERATURE_ENV, DEFAULT_TEMPERATURE)?,
            max_tokens: parse_env_or(LLM_MAX_TOKENS_ENV, DEFAULT_MAX_TOKENS)?,
            timeout_secs: parse_env_or(LLM_TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS)?,
        })
    }

    /// Validate ranges
    ///
    /// # Errors
    ///
    /// Returns an error for an empty URL or model, an out-of-range
    /// temperature, or a zero token limit or timeout
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow!(
                "{LLM_BASE_URL_ENV} must be an http(s) URL, got '{}'",
                self.base_url
            ));
        }
        if self.model.trim().is_empty() {
            return Err(anyhow!("{LLM_MODEL_ENV} cannot be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(anyhow!(
                "{LLM_TEMPERATURE_ENV} must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        if self.max_tokens == 0 {
            return Err(anyhow!("{LLM_MAX_TOKENS_ENV} must be positive"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("{LLM_TIMEOUT_ENV} must be positive"));
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// LLM provider
    pub llm: LlmConfig,
    /// Logging
    pub logging: LoggingConfig,
    /// Energy model, goal, and macro settings
    pub nutrition: NutritionConfig,
    /// Shopping-list pricing and conversions
    pub shopping: ShoppingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Calculation settings always use their defaults; only the LLM provider
    /// and logging read the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or validation fails
    pub fn from_env() -> Result<Self> {
        let config = Self {
            llm: LlmConfig::from_env()?,
            logging: LoggingConfig::from_env(),
            nutrition: NutritionConfig::default(),
            shopping: ShoppingConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()?;
        self.nutrition
            .validate()
            .context("Invalid nutrition configuration")?;
        self.shopping
            .validate()
            .context("Invalid shopping configuration")?;
        Ok(())
    }

    /// One-line description for startup logs, with the API key masked
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "llm_base_url={}, llm_model={}, llm_api_key={}, temperature={}, max_tokens={}",
            self.llm.base_url,
            self.llm.model,
            if self.llm.api_key.is_some() { "set" } else { "unset" },
            self.llm.temperature,
            self.llm.max_tokens
        )
    }

    /// Log the configuration summary
    pub fn log_summary(&self) {
        info!("Configuration loaded: {}", self.summary());
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: '{value}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_llm_config_is_valid() {
        let config = LlmConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.max_tokens, 3000);
    }

    #[test]
    fn test_llm_config_rejects_bad_values() {
        let bad_url = LlmConfig {
            base_url: "ftp://example.com".to_owned(),
            ..LlmConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let hot = LlmConfig {
            temperature: 2.5,
            ..LlmConfig::default()
        };
        assert!(hot.validate().is_err());
    }

    #[test]
    fn test_summary_masks_api_key() {
        let config = AppConfig {
            llm: LlmConfig {
                api_key: Some("sk-secret".to_owned()),
                ..LlmConfig::default()
            },
            ..AppConfig::default()
        };
        let summary = config.summary();
        assert!(summary.contains("llm_api_key=set"));
        assert!(!summary.contains("sk-secret"));
    }
}
