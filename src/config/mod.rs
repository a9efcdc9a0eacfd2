// ABOUTME: Configuration module for the MacroFit application
// ABOUTME: Environment-driven settings combined with the calculation engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for `MacroFit`.
//!
//! `AppConfig` is built once, usually from the environment, and passed
//! explicitly to the services that need it.

/// Environment and LLM provider configuration
pub mod environment;

pub use environment::{AppConfig, LlmConfig};
pub use macrofit_intelligence::config::{ConfigError, NutritionConfig, ShoppingConfig};
