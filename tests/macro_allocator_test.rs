// ABOUTME: Integration tests for the macro allocator
// ABOUTME: Covers target calories per goal mode, macro grams, protein-shake adjustment, and meal splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp, missing_docs)]

mod common;

use common::{calories_profile, duration_profile, init_test_logging, reference_profile};
use macrofit_core::errors::ErrorCode;
use macrofit_core::models::{MacroSplit, UserProfile};
use macrofit_intelligence::config::NutritionConfig;
use macrofit_intelligence::macro_allocator::{
    adjust_for_protein_intake, calculate_macro_targets, calculate_target_calories,
    distribute_calories_by_meals, meal_calorie_details,
};

// ============================================================================
// Target Calories
// ============================================================================

#[test]
fn test_target_calories_per_goal_mode() {
    init_test_logging();
    let config = NutritionConfig::default();
    assert_eq!(calculate_target_calories(&duration_profile(12), &config), 2204.0);
    // Auto: 5 kg to lose -> 0.3 kg/week -> 2662 - 330
    assert_eq!(calculate_target_calories(&reference_profile(), &config), 2332.0);
    assert_eq!(calculate_target_calories(&calories_profile(2000.0), &config), 2000.0);
}

#[test]
fn test_missing_goal_value_falls_back_to_auto() {
    let config = NutritionConfig::default();
    let profile = UserProfile {
        target_duration_weeks: None,
        ..duration_profile(12)
    };
    assert_eq!(calculate_target_calories(&profile, &config), 2332.0);
}

// ============================================================================
// Macros
// ============================================================================

#[test]
fn test_default_split_grams() {
    let config = NutritionConfig::default();
    let targets = calculate_macro_targets(&duration_profile(12), &config);
    assert_eq!(targets.daily_calories, 2204.0);
    // 661.2 / 4, 551 / 9, 991.8 / 4
    assert_eq!(targets.daily_protein, 165.0);
    assert_eq!(targets.daily_fat, 61.0);
    assert_eq!(targets.daily_carbs, 248.0);
    assert_eq!(targets.weekly_calories, 2204.0 * 7.0);
    assert_eq!(targets.weekly_protein, 165.0 * 7.0);
}

#[test]
fn test_custom_split_grams() {
    let config = NutritionConfig::default();
    let profile = UserProfile {
        macro_split: Some(MacroSplit {
            protein: 40.0,
            fat: 20.0,
            carbs: 40.0,
        }),
        ..duration_profile(12)
    };
    let targets = calculate_macro_targets(&profile, &config);
    assert_eq!(targets.daily_protein, 220.0);
    assert_eq!(targets.daily_fat, 49.0);
    assert_eq!(targets.daily_carbs, 220.0);
}

#[test]
fn test_protein_shakes_come_off_meal_targets() {
    let config = NutritionConfig::default();
    let targets = calculate_macro_targets(&duration_profile(12), &config);

    let unchanged = adjust_for_protein_intake(&targets, 0, &config);
    assert_eq!(unchanged, targets);

    let adjusted = adjust_for_protein_intake(&targets, 2, &config);
    assert_eq!(adjusted.daily_calories, 2204.0 - 240.0);
    assert_eq!(adjusted.daily_protein, 165.0 - 48.0);
    assert_eq!(adjusted.daily_fat, targets.daily_fat);
    assert_eq!(adjusted.daily_carbs, targets.daily_carbs);
    assert_eq!(adjusted.weekly_calories, 1964.0 * 7.0);
}

// ============================================================================
// Meal Distribution
// ============================================================================

#[test]
fn test_meal_split_sums_exactly() {
    let config = NutritionConfig::default();
    for total in [1001.0, 1500.0, 1964.0, 2204.0, 2777.0, 3333.0] {
        for meals in 1..=8_u8 {
            let split = distribute_calories_by_meals(total, meals, &config).unwrap();
            assert_eq!(split.len(), usize::from(meals));
            assert_eq!(
                split.iter().sum::<f64>(),
                total,
                "total={total} meals={meals}"
            );
        }
    }
}

#[test]
fn test_residual_goes_to_last_meal() {
    let config = NutritionConfig::default();
    // 250.25 / 350.35 / 400.4 round to 250 / 350 / 400
    assert_eq!(
        distribute_calories_by_meals(1001.0, 3, &config).unwrap(),
        vec![250.0, 350.0, 401.0]
    );
    // Equal split for 6 meals: 166.83 rounds up, last meal absorbs -1
    assert_eq!(
        distribute_calories_by_meals(1001.0, 6, &config).unwrap(),
        vec![167.0, 167.0, 167.0, 167.0, 167.0, 166.0]
    );
}

#[test]
fn test_fixed_tables() {
    let config = NutritionConfig::default();
    assert_eq!(
        distribute_calories_by_meals(2204.0, 3, &config).unwrap(),
        vec![551.0, 771.0, 882.0]
    );
    assert_eq!(
        distribute_calories_by_meals(2204.0, 4, &config).unwrap(),
        vec![441.0, 661.0, 331.0, 771.0]
    );
    assert_eq!(
        distribute_calories_by_meals(2204.0, 5, &config).unwrap(),
        vec![441.0, 220.0, 551.0, 331.0, 661.0]
    );
}

#[test]
fn test_zero_meals_is_error() {
    let config = NutritionConfig::default();
    let error = distribute_calories_by_meals(2000.0, 0, &config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_meal_details_names_and_percentages() {
    let config = NutritionConfig::default();
    let details = meal_calorie_details(2204.0, 3, &config).unwrap();
    let names: Vec<&str> = details.iter().map(|detail| detail.name.as_str()).collect();
    assert_eq!(names, vec!["朝食", "昼食", "夕食"]);
    let percentages: Vec<f64> = details.iter().map(|detail| detail.percentage).collect();
    assert_eq!(percentages, vec![25.0, 35.0, 40.0]);

    let five = meal_calorie_details(2204.0, 5, &config).unwrap();
    assert_eq!(five[1].name, "間食1");
    assert_eq!(five[3].name, "間食2");
}
