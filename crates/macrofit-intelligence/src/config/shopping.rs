// ABOUTME: Shopping-list configuration: price table, fallback prices, and unit conversion factors
// ABOUTME: Prices are yen at Japanese supermarket levels; amounts follow the meal-plan units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping List Configuration
//!
//! The price table maps an ingredient name to a yen price whose basis depends
//! on how the ingredient is bought: grains per kilogram, bread per loaf, milk
//! per litre, eggs/tofu/natto/fruit per piece, and everything else per 100 g.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default prices: (name, yen, basis noted alongside)
const DEFAULT_PRICES: &[(&str, f64)] = &[
    // Staples (per kg)
    ("米", 400.0),
    ("白米", 400.0),
    ("玄米", 500.0),
    ("オートミール", 600.0),
    ("パスタ", 400.0),
    // Bread (per loaf of about 340 g), noodles (per portion)
    ("食パン", 150.0),
    ("パン", 150.0),
    ("うどん", 100.0),
    ("そば", 150.0),
    // Meat and fish (per 100 g)
    ("鶏むね肉", 100.0),
    ("鶏もも肉", 120.0),
    ("鶏ささみ", 150.0),
    ("豚肉", 150.0),
    ("牛肉", 250.0),
    ("サーモン", 300.0),
    ("まぐろ", 400.0),
    ("白身魚", 200.0),
    ("エビ", 400.0),
    // Eggs (per piece), milk (per litre), soy (per block / pack)
    ("卵", 25.0),
    ("牛乳", 200.0),
    ("豆腐", 80.0),
    ("納豆", 30.0),
    // Produce (vegetables per 100 g, fruit per piece)
    ("ブロッコリー", 150.0),
    ("ほうれん草", 100.0),
    ("バナナ", 30.0),
    ("りんご", 100.0),
];

/// One price table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    /// Canonical ingredient name
    pub name: String,
    /// Price in yen for the ingredient's purchase basis
    pub yen: f64,
}

/// Ingredient price table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Entries, matched exactly first and then by containment
    pub entries: Vec<PriceEntry>,
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PRICES
                .iter()
                .map(|(name, yen)| PriceEntry {
                    name: (*name).to_owned(),
                    yen: *yen,
                })
                .collect(),
        }
    }
}

impl PriceTable {
    /// Price for an ingredient name
    ///
    /// An exact entry wins; otherwise the longest entry name contained in
    /// `name` is used, so "鶏むね肉(皮なし)" prices as "鶏むね肉" rather than "肉".
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .or_else(|| {
                self.entries
                    .iter()
                    .filter(|entry| !entry.name.is_empty() && name.contains(entry.name.as_str()))
                    .max_by_key(|entry| entry.name.chars().count())
            })
            .map(|entry| entry.yen)
    }
}

/// Shopping-list synthesis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingConfig {
    /// Ingredient price table
    pub prices: PriceTable,
    /// Fallback for gram-priced ingredients (yen per 100 g, or per kg for grains)
    pub default_yen_per_gram_basis: f64,
    /// Fallback for liquids (yen per litre)
    pub default_yen_per_litre: f64,
    /// Fallback for bread (yen per loaf)
    pub default_yen_per_loaf: f64,
    /// Fallback for countable units (yen per piece)
    pub default_yen_per_piece: f64,
    /// Flat price per unit when the unit is not recognised
    pub unknown_unit_yen: f64,
    /// Cooked rice weighs this many times its raw weight (2.2)
    pub cooked_to_raw_rice_ratio: f64,
    /// Grams per slice of sliced bread (57)
    pub grams_per_bread_slice: f64,
    /// Slices per loaf (6)
    pub slices_per_loaf: f64,
    /// Milk per protein shake (200 ml)
    pub milk_ml_per_serving: f64,
    /// Times the fixed breakfast is eaten per week (7)
    pub breakfast_uses_per_week: u32,
    /// Pattern A uses per week when no schedule is given (4)
    pub default_pattern_a_uses: u32,
    /// Pattern B uses per week when no schedule is given (3)
    pub default_pattern_b_uses: u32,
}

impl Default for ShoppingConfig {
    fn default() -> Self {
        Self {
            prices: PriceTable::default(),
            default_yen_per_gram_basis: 100.0,
            default_yen_per_litre: 200.0,
            default_yen_per_loaf: 150.0,
            default_yen_per_piece: 50.0,
            unknown_unit_yen: 50.0,
            cooked_to_raw_rice_ratio: 2.2,
            grams_per_bread_slice: 57.0,
            slices_per_loaf: 6.0,
            milk_ml_per_serving: 200.0,
            breakfast_uses_per_week: 7,
            default_pattern_a_uses: 4,
            default_pattern_b_uses: 3,
        }
    }
}

impl ShoppingConfig {
    /// Validate conversion factors and prices
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive factors or negative prices
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("cooked_to_raw_rice_ratio", self.cooked_to_raw_rice_ratio),
            ("grams_per_bread_slice", self.grams_per_bread_slice),
            ("slices_per_loaf", self.slices_per_loaf),
            ("milk_ml_per_serving", self.milk_ml_per_serving),
        ];
        for (name, value) in factors {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if let Some(entry) = self
            .prices
            .entries
            .iter()
            .find(|entry| !(entry.yen.is_finite() && entry.yen >= 0.0))
        {
            return Err(ConfigError::ValueOutOfRange(format!(
                "price for {} must be non-negative, got {}",
                entry.name, entry.yen
            )));
        }

        if self.default_pattern_a_uses + self.default_pattern_b_uses != 7 {
            return Err(ConfigError::InvalidWeights(format!(
                "pattern uses must cover 7 days, got {} + {}",
                self.default_pattern_a_uses, self.default_pattern_b_uses
            )));
        }

        Ok(())
    }
}
