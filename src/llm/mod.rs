// ABOUTME: LLM provider abstraction for meal-plan generation
// ABOUTME: Defines the provider contract, chat message types, and the response extraction step
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal-Plan Model Access
//!
//! Meal plans are written by a language model. A planning call is always a
//! single turn: one system prompt carrying the nutrition rules, one user
//! prompt carrying the numbers, and one text reply that `extraction` turns
//! into a `MealPlan`.
//!
//! ```rust,no_run
//! use macrofit::llm::{ChatMessage, ChatRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = ChatRequest::new(vec![
//!         ChatMessage::system("You are a nutrition planner."),
//!         ChatMessage::user("Plan a week of high-protein lunches."),
//!     ])
//!     .with_temperature(0.1);
//!     let reply = provider.complete(&request).await;
//! }
//! ```

mod openai_compatible;

/// Pulls a `MealPlan` out of a model response
pub mod extraction;
/// Meal-plan prompt construction
pub mod prompts;

pub use extraction::{extract_json_block, extract_meal_plan};
pub use openai_compatible::OpenAiCompatibleProvider;
pub use prompts::meal_plan_messages;

use async_trait::async_trait;
use macrofit_core::errors::AppResult;
use serde::{Deserialize, Serialize};

/// Who authored a prompt message
///
/// Planning never replays earlier replies, so only the two outbound roles exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Nutrition rules and output format
    System,
    /// The profile's targets and meal split
    User,
}

impl MessageRole {
    /// Role name on the chat-completions wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// One prompt message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author
    pub role: MessageRole,
    /// Prompt text
    pub content: String,
}

impl ChatMessage {
    /// Message with an explicit role
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System prompt
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// User prompt
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Prompt plus sampling settings for one completion
///
/// The model always comes from the provider's configuration. Unset sampling
/// fields are left out of the request so the server default applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// System prompt first, then the user prompt
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Completion token cap
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Request with server-default sampling
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            temperature: None,
            max_tokens: None,
        }
    }

    /// Low values keep the JSON shape stable
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// A week of meals needs a few thousand tokens; too low truncates the JSON
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Reply text and bookkeeping from a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Raw reply, possibly wrapped in prose or a code fence
    pub content: String,
    /// Model that actually answered, as reported by the server
    pub model: String,
    /// Absent when the server does not report usage
    pub usage: Option<TokenUsage>,
    /// `length` here usually means the plan was cut off mid-JSON
    pub finish_reason: Option<String>,
}

/// Token accounting reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the two prompts
    pub prompt_tokens: u32,
    /// Tokens in the reply
    pub completion_tokens: u32,
    /// Sum as reported, not recomputed
    pub total_tokens: u32,
}

/// Something that can answer a meal-plan prompt
///
/// `PlanningService` keeps one behind an `Arc` and calls it from async tasks,
/// hence the `Send + Sync` bound.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short label for logs
    fn name(&self) -> &str;

    /// Model name sent with every request
    fn default_model(&self) -> &str;

    /// Send the prompt and return the first reply
    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse>;
}
