// ABOUTME: Core types and constants for the MacroFit nutrition engine
// ABOUTME: Foundation crate with error handling, domain models, and physiological constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MacroFit` Core
//!
//! Foundation crate providing shared types and constants for the `MacroFit`
//! nutrition engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Energy-balance and macronutrient constants
//! - **models**: User profile, nutrition targets, projections, meal plans, shopping lists

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants shared by every calculation
pub mod constants;

/// Core data models (`UserProfile`, `NutritionTargets`, `MealPlan`, `ShoppingList`)
pub mod models;
