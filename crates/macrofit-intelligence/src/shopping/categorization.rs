// ABOUTME: Ingredient categorization by ordered keyword lists
// ABOUTME: Category also determines purchase priority on the shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::models::ShoppingPriority;
use serde::{Deserialize, Serialize};

/// Shopping categories, in matching order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// Rice, bread, noodles, oats
    Staples,
    /// Chicken, pork, beef
    Meat,
    /// Fish and seafood
    Seafood,
    /// Eggs
    Eggs,
    /// Milk, cheese, yoghurt
    Dairy,
    /// Tofu, natto
    Soy,
    /// Vegetables
    Vegetables,
    /// Fruit
    Fruit,
    /// Anything unmatched
    Other,
}

/// Keyword lists checked in this order; first match wins
const CATEGORY_KEYWORDS: &[(IngredientCategory, &[&str])] = &[
    (
        IngredientCategory::Staples,
        &[
            "米", "白米", "玄米", "ご飯", "ライス", "パン", "食パン", "オートミール", "パスタ",
            "うどん", "そば",
        ],
    ),
    (IngredientCategory::Meat, &["鶏", "豚", "牛", "肉"]),
    (IngredientCategory::Seafood, &["魚", "サーモン", "まぐろ"]),
    (IngredientCategory::Eggs, &["卵"]),
    (IngredientCategory::Dairy, &["牛乳", "チーズ", "ヨーグルト"]),
    (IngredientCategory::Soy, &["豆腐", "納豆"]),
    (IngredientCategory::Vegetables, &["野菜", "ブロッコリー", "ほうれん草"]),
    (IngredientCategory::Fruit, &["果物", "バナナ", "りんご"]),
];

/// Milk contains the meat keyword 牛, so it is matched before the ordered lists
const MILK: &str = "牛乳";

impl IngredientCategory {
    /// Display name on the shopping list
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Staples => "主食・穀物",
            Self::Meat => "肉類",
            Self::Seafood => "魚介類",
            Self::Eggs => "卵・乳製品",
            Self::Dairy => "乳製品",
            Self::Soy => "タンパク質・大豆製品",
            Self::Vegetables => "野菜",
            Self::Fruit => "果物",
            Self::Other => "その他",
        }
    }

    /// Purchase priority for items in this category
    #[must_use]
    pub const fn priority(self) -> ShoppingPriority {
        match self {
            Self::Staples | Self::Meat | Self::Seafood | Self::Eggs | Self::Soy => {
                ShoppingPriority::High
            }
            Self::Vegetables => ShoppingPriority::Medium,
            Self::Dairy | Self::Fruit | Self::Other => ShoppingPriority::Low,
        }
    }
}

/// Category of an ingredient name
#[must_use]
pub fn categorize(name: &str) -> IngredientCategory {
    if name.contains(MILK) {
        return IngredientCategory::Dairy;
    }

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(IngredientCategory::Other, |(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_list_wins() {
        assert_eq!(categorize("白米"), IngredientCategory::Staples);
        assert_eq!(categorize("鶏むね肉"), IngredientCategory::Meat);
        assert_eq!(categorize("サーモン"), IngredientCategory::Seafood);
        assert_eq!(categorize("卵"), IngredientCategory::Eggs);
        assert_eq!(categorize("ギリシャヨーグルト"), IngredientCategory::Dairy);
        assert_eq!(categorize("絹豆腐"), IngredientCategory::Soy);
        assert_eq!(categorize("ブロッコリー"), IngredientCategory::Vegetables);
        assert_eq!(categorize("バナナ"), IngredientCategory::Fruit);
        assert_eq!(categorize("キャベツ"), IngredientCategory::Other);
    }

    #[test]
    fn test_milk_is_dairy_not_meat() {
        assert_eq!(categorize("牛乳"), IngredientCategory::Dairy);
        assert_eq!(categorize("低脂肪牛乳"), IngredientCategory::Dairy);
        assert_eq!(categorize("牛肉"), IngredientCategory::Meat);
        assert_eq!(categorize("牛乳プリン"), IngredientCategory::Dairy);
    }

    #[test]
    fn test_priority_by_category() {
        assert_eq!(IngredientCategory::Eggs.priority(), ShoppingPriority::High);
        assert_eq!(IngredientCategory::Vegetables.priority(), ShoppingPriority::Medium);
        assert_eq!(IngredientCategory::Dairy.priority(), ShoppingPriority::Low);
    }
}
