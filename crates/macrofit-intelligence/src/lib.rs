// ABOUTME: Nutrition planning algorithms for the MacroFit engine
// ABOUTME: Energy model, goal solver, macro allocation, weight projection, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `MacroFit` Intelligence
//!
//! Deterministic calculations over a `UserProfile` snapshot. Every function
//! is synchronous and side-effect free apart from `tracing` events, so the
//! results can be shared freely across threads.
//!
//! ## Modules
//!
//! - **energy**: Mifflin-St Jeor BMR, activity multipliers, TDEE
//! - **`goal_solver`**: duration and calorie conversions, goal plausibility findings
//! - **`macro_allocator`**: target calories, macro grams, per-meal split
//! - **`weight_projection`**: week-by-week weight trajectory
//! - **shopping**: weekly shopping list from an LLM meal plan
//! - **config**: tunable constants with validation

/// Tunable constants for every calculation
pub mod config;

/// BMR, activity level, and TDEE
pub mod energy;

/// Conversions between goal duration and daily calories
pub mod goal_solver;

/// Target calories, macros, and meal distribution
pub mod macro_allocator;

/// Shopping list synthesis
pub mod shopping;

/// Weight trajectory simulation
pub mod weight_projection;

pub use config::{NutritionConfig, ShoppingConfig};
pub use energy::{
    activity_multiplier, calculate_bmr, calculate_tdee, estimate_energy, ActivityLevel,
    EnergyEstimate,
};
pub use goal_solver::{
    calories_from_duration, duration_from_calories, validate_goal, GoalFinding, GoalSolverError,
    GoalValidation,
};
pub use macro_allocator::{
    adjust_for_protein_intake, calculate_macro_targets, calculate_target_calories,
    distribute_calories_by_meals, meal_calorie_details, weight_change_rate,
};
pub use shopping::synthesize_shopping_list;
pub use weight_projection::project_weight;
