// ABOUTME: Shopping list synthesis module organization
// ABOUTME: Pantry exclusion, unit normalization, categorization, pricing, and aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Ingredient categories and purchase priority
pub mod categorization;
/// Cooked-rice and bread unit conversions
pub mod normalization;
/// Seasonings and powders assumed on hand
pub mod pantry;
/// Price estimation per unit basis
pub mod pricing;
/// Weekly aggregation into a categorized list
pub mod synthesizer;

pub use categorization::{categorize, IngredientCategory};
pub use normalization::{normalize, IngredientFamily, NormalizedAmount};
pub use pantry::is_pantry_item;
pub use pricing::estimate_price;
pub use synthesizer::synthesize_shopping_list;
