// ABOUTME: Service layer composing the calculation engine with the LLM boundary
// ABOUTME: Exposes the planning pipeline used by the CLI and library callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Nutrition report, projection, and meal-plan generation pipeline
pub mod planning;

pub use planning::{GeneratedMealPlan, NutritionReport, PlanningService};
