// ABOUTME: Price estimation for one weekly ingredient amount
// ABOUTME: Unit decides the price basis: per kg, per 100 g, per loaf, per litre, or per piece
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ShoppingConfig;

use super::normalization::{IngredientFamily, RAW_RICE_UNIT, SLICE_UNIT};

/// Gram-listed ingredients sold by the kilogram
const KG_PRICED_KEYWORDS: [&str; 5] = ["米", "白米", "玄米", "オートミール", "パスタ"];

/// Units priced per piece
const PIECE_UNITS: [&str; 4] = ["個", "本", "パック", "丁"];

const GRAMS_PER_KG: f64 = 1000.0;
const GRAMS_PER_PRICE_UNIT: f64 = 100.0;
const ML_PER_LITRE: f64 = 1000.0;

/// Round up, ignoring float noise below a millionth
pub(super) fn round_up(value: f64) -> f64 {
    ((value * 1e6).round() / 1e6).ceil()
}

/// Estimated price in yen for `amount` of an ingredient, rounded up
#[must_use]
pub fn estimate_price(
    name: &str,
    amount: f64,
    unit: &str,
    family: IngredientFamily,
    config: &ShoppingConfig,
) -> f64 {
    let listed = config.prices.lookup(name);
    let kg_priced = KG_PRICED_KEYWORDS.iter().any(|keyword| name.contains(keyword));

    let price = match unit {
        _ if unit == RAW_RICE_UNIT || (unit == "g" && kg_priced) => {
            amount * listed.unwrap_or(config.default_yen_per_gram_basis) / GRAMS_PER_KG
        }
        "g" => amount * listed.unwrap_or(config.default_yen_per_gram_basis) / GRAMS_PER_PRICE_UNIT,
        SLICE_UNIT if family == IngredientFamily::Bread => {
            amount * listed.unwrap_or(config.default_yen_per_loaf) / config.slices_per_loaf
        }
        "ml" => amount * listed.unwrap_or(config.default_yen_per_litre) / ML_PER_LITRE,
        _ if unit == SLICE_UNIT || PIECE_UNITS.contains(&unit) => {
            amount * listed.unwrap_or(config.default_yen_per_piece)
        }
        _ => amount * config.unknown_unit_yen,
    };

    round_up(price)
}
