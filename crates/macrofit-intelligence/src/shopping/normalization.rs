// ABOUTME: Unit normalization for shopping: cooked rice to raw grams, bread to slices
// ABOUTME: Other ingredients pass through with their amount and unit unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::models::MealIngredient;

use crate::config::ShoppingConfig;

/// Display unit for rice converted to raw weight
pub const RAW_RICE_UNIT: &str = "g(生米)";
/// Display unit for bread
pub const SLICE_UNIT: &str = "枚";

const GRAM_UNIT: &str = "g";
const LOAF_UNIT: &str = "斤";

const RICE_KEYWORDS: [&str; 3] = ["米", "ご飯", "ライス"];
const BREAD_KEYWORDS: [&str; 1] = ["パン"];

/// Ingredient families with special unit handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientFamily {
    /// Rice, listed by cooked weight
    Rice,
    /// Sliced bread
    Bread,
    /// Everything else
    Other,
}

impl IngredientFamily {
    /// Family of an ingredient name
    #[must_use]
    pub fn of(name: &str) -> Self {
        if RICE_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
            Self::Rice
        } else if BREAD_KEYWORDS.iter().any(|keyword| name.contains(keyword)) {
            Self::Bread
        } else {
            Self::Other
        }
    }
}

/// Amount and unit after normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAmount {
    /// Amount per serving in `unit`
    pub amount: f64,
    /// Display unit
    pub unit: String,
    /// Family the ingredient belongs to
    pub family: IngredientFamily,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Normalize one ingredient line for purchasing
///
/// - rice in grams: cooked weight / 2.2, to 0.1 g, unit `g(生米)`
/// - bread in grams: / 57 g per slice, to 0.01, unit `枚`
/// - bread in loaves (`斤`): x 6 slices, unit `枚`
/// - anything else: unchanged
#[must_use]
pub fn normalize(ingredient: &MealIngredient, config: &ShoppingConfig) -> NormalizedAmount {
    let family = IngredientFamily::of(&ingredient.name);
    let unit = ingredient.unit.trim();

    let (amount, unit) = match (family, unit) {
        (IngredientFamily::Rice, GRAM_UNIT) => (
            round_to(ingredient.amount / config.cooked_to_raw_rice_ratio, 1),
            RAW_RICE_UNIT,
        ),
        (IngredientFamily::Bread, GRAM_UNIT) => (
            round_to(ingredient.amount / config.grams_per_bread_slice, 2),
            SLICE_UNIT,
        ),
        (IngredientFamily::Bread, LOAF_UNIT) => {
            (ingredient.amount * config.slices_per_loaf, SLICE_UNIT)
        }
        _ => (ingredient.amount, unit),
    };

    NormalizedAmount {
        amount,
        unit: unit.to_owned(),
        family,
    }
}
