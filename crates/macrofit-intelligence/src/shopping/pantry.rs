// ABOUTME: Pantry staples that never appear on a shopping list
// ABOUTME: Seasonings, cooking oils, and protein powders matched by name substring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Seasonings and fats assumed to be on hand
const SEASONINGS: [&str; 11] = [
    "塩",
    "胡椒",
    "砂糖",
    "醤油",
    "味噌",
    "みりん",
    "酒",
    "ごま油",
    "オリーブオイル",
    "サラダ油",
    "バター",
];

/// Protein powders, bought in bulk outside the weekly list
const PROTEIN_POWDERS: [&str; 3] = ["プロテイン", "プロテインパウダー", "ホエイプロテイン"];

/// Whether an ingredient is a pantry staple
#[must_use]
pub fn is_pantry_item(name: &str) -> bool {
    SEASONINGS
        .iter()
        .chain(PROTEIN_POWDERS.iter())
        .any(|staple| name.contains(staple))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seasonings_and_powders_match_by_substring() {
        assert!(is_pantry_item("醤油"));
        assert!(is_pantry_item("減塩醤油"));
        assert!(is_pantry_item("ホエイプロテイン"));
        assert!(is_pantry_item("エクストラバージンオリーブオイル"));
    }

    #[test]
    fn test_groceries_are_not_pantry_items() {
        assert!(!is_pantry_item("鶏むね肉"));
        assert!(!is_pantry_item("白米"));
        assert!(!is_pantry_item("牛乳"));
    }
}
