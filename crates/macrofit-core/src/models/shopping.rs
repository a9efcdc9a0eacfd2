// ABOUTME: Shopping list output records: categories, items, and purchase priority
// ABOUTME: Amounts and prices are whole numbers rounded up from the weekly totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// How important an item is to buy
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingPriority {
    /// Staples and protein sources
    High,
    /// Vegetables
    Medium,
    /// Everything else
    Low,
}

impl ShoppingPriority {
    /// Sort rank: high=0, medium=1, low=2
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// One line of the shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Ingredient name
    pub name: String,
    /// Weekly amount, rounded up
    pub amount: u64,
    /// Display unit after normalization
    pub unit: String,
    /// Estimated price in yen, rounded up
    pub estimated_price: u64,
    /// Purchase priority
    pub priority: ShoppingPriority,
}

/// Items sharing a category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingCategory {
    /// Category display name
    pub name: String,
    /// Items sorted by priority, ties in insertion order
    pub items: Vec<ShoppingItem>,
}

/// A week of groceries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Total estimated cost in yen
    pub total_cost: u64,
    /// Categories in first-seen order
    pub categories: Vec<ShoppingCategory>,
}

impl ShoppingList {
    /// Iterate over every item of every category
    pub fn items(&self) -> impl Iterator<Item = &ShoppingItem> {
        self.categories.iter().flat_map(|category| category.items.iter())
    }

    /// Find an item by exact name
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&ShoppingItem> {
        self.items().find(|item| item.name == name)
    }

    /// Find a category by display name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&ShoppingCategory> {
        self.categories.iter().find(|category| category.name == name)
    }
}
