// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference profiles, and a sample meal-plan response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `macrofit`

use std::env;
use std::sync::Once;

use macrofit_core::models::{Gender, GoalSettingMethod, UserProfile};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default stays quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 170 cm, 80 kg, 30-year-old man training 3x/week, aiming for 75 kg
///
/// Goal is automatic; callers switch the method as needed.
pub fn reference_profile() -> UserProfile {
    UserProfile {
        height: 170.0,
        weight: 80.0,
        age: 30,
        gender: Gender::Male,
        body_fat_percentage: 20.0,
        exercise_frequency: 3,
        target_weight: 75.0,
        goal_setting_method: None,
        target_duration_weeks: None,
        target_daily_calories: None,
        macro_split: None,
        meals_per_day: 3,
        protein_sources: vec!["鶏肉".to_owned(), "魚".to_owned()],
        allergies: Vec::new(),
        protein_intake_frequency: 0,
        breakfast_staple: None,
    }
}

/// Reference profile with a 12-week duration goal
pub fn duration_profile(weeks: u32) -> UserProfile {
    UserProfile {
        goal_setting_method: Some(GoalSettingMethod::Duration),
        target_duration_weeks: Some(weeks),
        ..reference_profile()
    }
}

/// Reference profile with a daily-calorie goal
pub fn calories_profile(daily: f64) -> UserProfile {
    UserProfile {
        goal_setting_method: Some(GoalSettingMethod::Calories),
        target_daily_calories: Some(daily),
        ..reference_profile()
    }
}

/// Meal-plan JSON with a breakfast, lunch pair, and dinner pair
///
/// With the default 4/3 alternation and two shakes a day the list costs
/// ¥4538: milk 560, oats 168, eggs 350, rice 1400, bread 200, chicken 600,
/// salmon 900, broccoli 360.
pub const SAMPLE_MEAL_PLAN: &str = r#"{
  "mealPatterns": {
    "breakfast": {
      "name": "オートミールと卵",
      "calories": 450,
      "ingredients": [
        {"name": "オートミール", "amount": 40, "unit": "g"},
        {"name": "卵", "amount": 2, "unit": "個"},
        {"name": "醤油", "amount": 5, "unit": "ml"}
      ],
      "instructions": ["1. 卵を茹でる"]
    },
    "lunch": {
      "patternA": {
        "name": "鶏そぼろ丼",
        "ingredients": [{"name": "白米", "amount": 1100, "unit": "g"}]
      },
      "patternB": {
        "name": "おにぎり",
        "ingredients": [{"name": "白米", "amount": 1100, "unit": "g"}]
      }
    },
    "dinner": {
      "patternA": {
        "name": "チキンサンド",
        "ingredients": [
          {"name": "食パン", "amount": 114, "unit": "g"},
          {"name": "鶏むね肉", "amount": 150, "unit": "g"},
          {"name": "塩", "amount": 1, "unit": "g"}
        ]
      },
      "patternB": {
        "name": "鮭のソテー",
        "ingredients": [
          {"name": "サーモン", "amount": 100, "unit": "g"},
          {"name": "ブロッコリー", "amount": 80, "unit": "g"},
          {"name": "オリーブオイル", "amount": 5, "unit": "ml"}
        ]
      }
    }
  },
  "totalCost": 4000,
  "prepTime": 90
}"#;

/// The sample plan wrapped the way a chat model usually answers
pub fn fenced_response() -> String {
    format!("以下が1週間の食事プランです。\n\n```json\n{SAMPLE_MEAL_PLAN}\n```\n\nご確認ください。")
}
