// ABOUTME: Integration tests for the energy model
// ABOUTME: Covers Mifflin-St Jeor BMR, the activity step function, and TDEE rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp, missing_docs)]

mod common;

use common::{init_test_logging, reference_profile};
use macrofit_core::models::{Gender, UserProfile};
use macrofit_intelligence::config::NutritionConfig;
use macrofit_intelligence::energy::{
    activity_multiplier, calculate_bmr, calculate_tdee, estimate_energy, ActivityLevel,
};

// ============================================================================
// BMR
// ============================================================================

#[test]
fn test_bmr_male_reference() {
    init_test_logging();
    let config = NutritionConfig::default();
    let bmr = calculate_bmr(&reference_profile(), &config.bmr);
    // 800 + 1062.5 - 150 + 5
    assert!((bmr - 1717.5).abs() < 1e-9);
}

#[test]
fn test_bmr_female_offset() {
    let config = NutritionConfig::default();
    let female = UserProfile {
        gender: Gender::Female,
        ..reference_profile()
    };
    let male_bmr = calculate_bmr(&reference_profile(), &config.bmr);
    let female_bmr = calculate_bmr(&female, &config.bmr);
    // +5 vs -161
    assert!((male_bmr - female_bmr - 166.0).abs() < 1e-9);
    assert!((female_bmr - 1551.5).abs() < 1e-9);
}

#[test]
fn test_bmr_is_not_rounded() {
    let config = NutritionConfig::default();
    let profile = UserProfile {
        height: 165.5,
        weight: 61.3,
        ..reference_profile()
    };
    // 613 + 1034.375 - 150 + 5
    assert!((calculate_bmr(&profile, &config.bmr) - 1502.375).abs() < 1e-9);
}

// ============================================================================
// Activity and TDEE
// ============================================================================

#[test]
fn test_activity_step_function() {
    let config = NutritionConfig::default();
    let factors = &config.activity_factors;
    let expected = [
        (0, 1.2),
        (1, 1.375),
        (2, 1.375),
        (3, 1.55),
        (4, 1.55),
        (5, 1.725),
        (6, 1.725),
        (7, 1.9),
        (14, 1.9),
    ];
    for (sessions, factor) in expected {
        assert!(
            (activity_multiplier(sessions, factors) - factor).abs() < f64::EPSILON,
            "sessions={sessions}"
        );
    }
}

#[test]
fn test_tdee_reference() {
    let config = NutritionConfig::default();
    let estimate = estimate_energy(&reference_profile(), &config);
    assert_eq!(estimate.activity_level, ActivityLevel::ModeratelyActive);
    assert!((estimate.activity_multiplier - 1.55).abs() < f64::EPSILON);
    // round(1717.5 * 1.55) = round(2662.125)
    assert_eq!(estimate.tdee, 2662.0);
    assert_eq!(calculate_tdee(&reference_profile(), &config), 2662.0);
}

#[test]
fn test_tdee_is_whole_and_monotonic_in_sessions() {
    let config = NutritionConfig::default();
    let mut previous = 0.0;
    for sessions in 0..=14 {
        let profile = UserProfile {
            exercise_frequency: sessions,
            ..reference_profile()
        };
        let tdee = calculate_tdee(&profile, &config);
        assert_eq!(tdee, tdee.round());
        assert!(tdee >= previous, "tdee dropped at {sessions} sessions");
        previous = tdee;
    }
}

#[test]
fn test_energy_estimate_serializes_camel_case() {
    let config = NutritionConfig::default();
    let json = serde_json::to_value(estimate_energy(&reference_profile(), &config)).unwrap();
    assert_eq!(json["activityLevel"], "moderately_active");
    assert_eq!(json["tdee"], 2662.0);
    assert!(json.get("activityMultiplier").is_some());
}
