// ABOUTME: Configuration module for macrofit-intelligence crate
// ABOUTME: Re-exports nutrition and shopping configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;

/// Energy model, goal limits, macro split, and meal distribution settings
pub mod nutrition;

/// Pantry, category, and price tables for shopping-list synthesis
pub mod shopping;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, EnergyBalanceConfig, GoalLimitsConfig, MacroConfig,
    MealDistributionConfig, NutritionConfig, ProteinIntakeConfig,
};
pub use shopping::{PriceEntry, PriceTable, ShoppingConfig};
