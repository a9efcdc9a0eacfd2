// ABOUTME: Domain models shared by the calculation engine, LLM boundary, and CLI
// ABOUTME: Profiles in; targets, projections, and shopping lists out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models.
//!
//! All records serialize camelCase to match the JSON exchanged with the form
//! and the language model.

mod meal_plan;
mod nutrition;
mod profile;
mod shopping;

pub use meal_plan::{
    DaySchedule, MealIngredient, MealPattern, MealPatterns, MealPlan, PatternChoice, PatternPair,
    PatternUsage, ProteinIntakePattern, WeeklySchedule,
};
pub use nutrition::{
    MealCalorieDetail, NutritionTargets, WeightProjection, WeightProjectionPoint,
};
pub use profile::{
    Gender, GoalSettingMethod, MacroSplit, ResolvedGoal, UserProfile, MAX_GOAL_DURATION_WEEKS,
};
pub use shopping::{ShoppingCategory, ShoppingItem, ShoppingList, ShoppingPriority};
