// ABOUTME: Main library entry point for the MacroFit nutrition planner
// ABOUTME: Wires the calculation engine to configuration, logging, and the LLM meal-plan boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MacroFit`
//!
//! Nutrition targets, weight projections, and weekly shopping lists.
//!
//! The arithmetic lives in `macrofit-intelligence` and the shared records in
//! `macrofit-core`. This crate adds the pieces around them:
//!
//! - **config**: environment-driven settings for the LLM provider and logging
//! - **logging**: `tracing-subscriber` setup
//! - **llm**: provider trait, `OpenAI`-compatible client, prompts, JSON extraction
//! - **services**: `PlanningService`, which composes the whole pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use macrofit::services::PlanningService;
//! use macrofit_core::models::UserProfile;
//!
//! fn report(profile: &UserProfile) -> macrofit_core::errors::AppResult<()> {
//!     let report = PlanningService::offline().nutrition_report(profile)?;
//!     println!("TDEE {} kcal", report.energy.tdee);
//!     Ok(())
//! }
//! ```

/// Environment-driven application configuration
pub mod config;

/// LLM provider abstraction and meal-plan prompt/response handling
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Planning pipeline composing the calculation engine and the LLM
pub mod services;

pub use macrofit_core::errors::{AppError, AppResult, ErrorCode};
