// ABOUTME: OpenAI-compatible chat completion client used to generate meal plans
// ABOUTME: Works with OpenAI, Azure-style gateways, Ollama, vLLM, and other compatible endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # `OpenAI`-Compatible Provider
//!
//! Posts to `{base_url}/chat/completions` and maps HTTP failures onto
//! `AppError` codes. Configure it through `LlmConfig`
//! (`MACROFIT_LLM_BASE_URL`, `MACROFIT_LLM_API_KEY`, `MACROFIT_LLM_MODEL`).

use std::time::Duration;

use async_trait::async_trait;
use macrofit_core::errors::{AppError, AppResult, ErrorCode};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmProvider, TokenUsage};
use crate::config::LlmConfig;

/// Service name used in error messages
const SERVICE: &str = "LLM";

/// Connection timeout
const CONNECT_TIMEOUT_SECS: u64 = 30;

/// Characters of an error body kept in messages
const ERROR_BODY_PREVIEW: usize = 200;

// Wire types. Only the fields planning needs are modelled.

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a ChatMessage> for OpenAiMessage<'a> {
    fn from(msg: &'a ChatMessage) -> Self {
        Self {
            role: msg.role.as_str(),
            content: &msg.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
    #[serde(default)]
    usage: Option<OpenAiUsage>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiUsage {
    #[serde(rename = "prompt_tokens")]
    prompt: u32,
    #[serde(rename = "completion_tokens")]
    completion: u32,
    #[serde(rename = "total_tokens")]
    total: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorResponse {
    error: OpenAiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorDetail {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
}

/// Chat-completions client for any server speaking the `OpenAI` wire format
pub struct OpenAiCompatibleProvider {
    client: Client,
    config: LlmConfig,
}

impl OpenAiCompatibleProvider {
    /// Build the HTTP client with the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new(config: LlmConfig) -> AppResult<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Endpoint URL for chat completions
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Local servers such as Ollama run without a key
    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(ref api_key) = self.config.api_key {
            request.bearer_auth(api_key)
        } else {
            request
        }
    }

    /// Map a non-success HTTP status and body to an `AppError`
    fn parse_error_response(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<OpenAiErrorResponse>(body).map_or_else(
            |_| body.chars().take(ERROR_BODY_PREVIEW).collect::<String>(),
            |response| match response.error.error_type {
                Some(kind) => format!("{kind} - {}", response.error.message),
                None => response.error.message,
            },
        );

        match status.as_u16() {
            401 | 403 => AppError::new(
                ErrorCode::ExternalAuthFailed,
                format!("API authentication failed: {detail}"),
            ),
            429 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "LLM rate limit reached. Please wait a moment and try again.",
            ),
            502..=504 => AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("LLM server is not responding ({status}): {detail}"),
            ),
            _ => AppError::external_service(SERVICE, format!("API error ({status}): {detail}")),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        "openai_compatible"
    }

    fn default_model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip(self, request), fields(model = %self.config.model))]
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        let model = self.config.model.as_str();
        let body = OpenAiRequest {
            model,
            messages: request.messages.iter().map(OpenAiMessage::from).collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            stream: false,
        };

        debug!(
            url = %self.completions_url(),
            messages = body.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .add_auth_header(self.client.post(self.completions_url()).json(&body))
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to {}: {}", self.config.base_url, e);
                if e.is_connect() || e.is_timeout() {
                    AppError::new(
                        ErrorCode::ExternalServiceUnavailable,
                        format!("Cannot reach LLM server at {}", self.config.base_url),
                    )
                    .with_source(e)
                } else {
                    AppError::external_service(SERVICE, format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read API response: {}", e);
            AppError::external_service(SERVICE, format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            return Err(Self::parse_error_response(status, &text));
        }

        let parsed: OpenAiResponse = serde_json::from_str(&text).map_err(|e| {
            error!(
                "Failed to parse API response: {} - body: {}",
                e,
                text.chars().take(ERROR_BODY_PREVIEW).collect::<String>()
            );
            AppError::external_service(SERVICE, format!("Failed to parse response: {e}"))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned no choices"))?;
        let content = choice
            .message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::external_service(SERVICE, "API returned an empty message"))?;

        debug!(
            content_len = content.len(),
            finish_reason = ?choice.finish_reason,
            "Received chat completion"
        );

        Ok(ChatResponse {
            content,
            model: parsed.model.unwrap_or_else(|| model.to_owned()),
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt,
                completion_tokens: u.completion,
                total_tokens: u.total,
            }),
            finish_reason: choice.finish_reason,
        })
    }
}
