// ABOUTME: Criterion benchmarks for the nutrition calculators and shopping-list synthesis
// ABOUTME: Measures targets, projections, meal-plan extraction, and list building
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the planning pipeline.
//!
//! Everything except the LLM call is pure arithmetic, so these run offline.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use macrofit::llm::extract_meal_plan;
use macrofit::services::PlanningService;
use macrofit_core::models::{Gender, GoalSettingMethod, MealPlan, UserProfile};
use macrofit_intelligence::config::{NutritionConfig, ShoppingConfig};
use macrofit_intelligence::shopping::synthesize_shopping_list;
use macrofit_intelligence::weight_projection::project_weight;
use serde_json::{json, Value};

fn bench_profile(method: Option<GoalSettingMethod>) -> UserProfile {
    UserProfile {
        height: 170.0,
        weight: 80.0,
        age: 30,
        gender: Gender::Male,
        body_fat_percentage: 20.0,
        exercise_frequency: 3,
        target_weight: 75.0,
        goal_setting_method: method,
        target_duration_weeks: Some(12),
        target_daily_calories: Some(2680.0),
        macro_split: None,
        meals_per_day: 3,
        protein_sources: Vec::new(),
        allergies: Vec::new(),
        protein_intake_frequency: 1,
        breakfast_staple: None,
    }
}

/// Pattern with `count` distinct ingredients in the common unit families
fn pattern(prefix: &str, count: usize) -> Value {
    let units = ["g", "個", "ml", "枚", "パック"];
    let ingredients: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "name": format!("{prefix}{index}"),
                "amount": 50 + index * 10,
                "unit": units[index % units.len()],
            })
        })
        .collect();
    json!({ "name": prefix, "ingredients": ingredients })
}

fn meal_plan_json(ingredients_per_pattern: usize) -> String {
    json!({
        "mealPatterns": {
            "breakfast": pattern("朝", ingredients_per_pattern),
            "lunch": {
                "patternA": pattern("昼A", ingredients_per_pattern),
                "patternB": pattern("昼B", ingredients_per_pattern),
            },
            "dinner": {
                "patternA": pattern("夕A", ingredients_per_pattern),
                "patternB": pattern("夕B", ingredients_per_pattern),
            },
        }
    })
    .to_string()
}

fn bench_targets(c: &mut Criterion) {
    let service = PlanningService::offline();
    let profile = bench_profile(Some(GoalSettingMethod::Duration));

    c.bench_function("nutrition_report", |b| {
        b.iter(|| service.nutrition_report(black_box(&profile)));
    });
}

fn bench_projection(c: &mut Criterion) {
    let config = NutritionConfig::default();
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
    let mut group = c.benchmark_group("weight_projection");

    for (label, method) in [
        ("auto", None),
        ("duration", Some(GoalSettingMethod::Duration)),
        ("calories_capped", Some(GoalSettingMethod::Calories)),
    ] {
        let profile = bench_profile(method);
        group.bench_with_input(BenchmarkId::from_parameter(label), &profile, |b, profile| {
            b.iter(|| project_weight(black_box(profile), &config, start));
        });
    }

    group.finish();
}

fn bench_shopping(c: &mut Criterion) {
    let config = ShoppingConfig::default();
    let mut group = c.benchmark_group("shopping_list");

    for size in [5_usize, 20, 50] {
        let response = meal_plan_json(size);
        let plan: MealPlan = serde_json::from_str(&response).unwrap_or_default();

        group.bench_with_input(BenchmarkId::new("extract", size), &response, |b, response| {
            b.iter(|| extract_meal_plan(black_box(response)));
        });
        group.bench_with_input(BenchmarkId::new("synthesize", size), &plan, |b, plan| {
            b.iter(|| synthesize_shopping_list(black_box(plan), 1, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_targets, bench_projection, bench_shopping);
criterion_main!(benches);
