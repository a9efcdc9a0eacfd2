// ABOUTME: Macro allocator: target calories, protein/fat/carb grams, and per-meal calorie split
// ABOUTME: Meal distribution preserves the daily total exactly by giving the rounding residual to the last meal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macrofit_core::constants::DAYS_PER_WEEK;
use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::{MealCalorieDetail, NutritionTargets, ResolvedGoal, UserProfile};
use tracing::debug;

use crate::config::{EnergyBalanceConfig, NutritionConfig};
use crate::energy::estimate_energy;
use crate::goal_solver::calories_from_duration;

const THREE_MEAL_NAMES: [&str; 3] = ["朝食", "昼食", "夕食"];
const FOUR_MEAL_NAMES: [&str; 4] = ["朝食", "昼食", "間食", "夕食"];
const FIVE_MEAL_NAMES: [&str; 5] = ["朝食", "間食1", "昼食", "間食2", "夕食"];

/// Automatic weekly weight change for the auto goal mode (kg/week)
///
/// 0.5 kg/week when the total change exceeds 10 kg, otherwise 0.3 kg/week.
/// Positive only when the target is above the current weight.
#[must_use]
pub fn weight_change_rate(current_kg: f64, target_kg: f64, config: &EnergyBalanceConfig) -> f64 {
    let difference = target_kg - current_kg;
    let rate = if difference.abs() > config.large_change_threshold_kg {
        config.large_change_rate_kg_per_week
    } else {
        config.small_change_rate_kg_per_week
    };

    if difference > 0.0 {
        rate
    } else {
        -rate
    }
}

/// Daily calorie target for the profile's goal
///
/// - Duration: solved from the number of weeks
/// - Calories: the user's figure verbatim
/// - Auto: `round(tdee + rate x 7700 / 7)`
#[must_use]
pub fn calculate_target_calories(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    match profile.goal() {
        ResolvedGoal::Duration { weeks } => calories_from_duration(profile, weeks, config)
            .unwrap_or_else(|_| auto_target_calories(profile, config)),
        ResolvedGoal::Calories { daily } => daily,
        ResolvedGoal::Auto => auto_target_calories(profile, config),
    }
}

fn auto_target_calories(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    let tdee = estimate_energy(profile, config).tdee;
    let rate = weight_change_rate(profile.weight, profile.target_weight, &config.energy_balance);
    let daily_adjustment = rate * config.energy_balance.kcal_per_kg / DAYS_PER_WEEK;
    (tdee + daily_adjustment).round()
}

/// Daily and weekly macro targets for the profile
///
/// Applies the profile's split (or the 30/25/45 default) to the target
/// calories at 4/9/4 kcal per gram, rounding each to whole grams.
#[must_use]
pub fn calculate_macro_targets(profile: &UserProfile, config: &NutritionConfig) -> NutritionTargets {
    let calories = calculate_target_calories(profile, config);
    let split = profile.macro_split.unwrap_or(config.macros.default_split);

    let protein = (calories * split.protein / 100.0 / config.macros.kcal_per_gram_protein).round();
    let fat = (calories * split.fat / 100.0 / config.macros.kcal_per_gram_fat).round();
    let carbs = (calories * split.carbs / 100.0 / config.macros.kcal_per_gram_carbs).round();

    debug!(calories, protein, fat, carbs, "Allocated macro targets");
    NutritionTargets::from_daily(calories, protein, fat, carbs)
}

/// Subtract daily protein shakes from the food targets
///
/// Shakes are eaten on top of the meals, so meal planning only covers what
/// is left. Fat and carbohydrate targets are unchanged.
#[must_use]
pub fn adjust_for_protein_intake(
    targets: &NutritionTargets,
    servings_per_day: u8,
    config: &NutritionConfig,
) -> NutritionTargets {
    if servings_per_day == 0 {
        return *targets;
    }

    let servings = f64::from(servings_per_day);
    NutritionTargets::from_daily(
        targets.daily_calories - servings * config.protein_intake.kcal_per_serving,
        targets.daily_protein - servings * config.protein_intake.protein_g_per_serving,
        targets.daily_fat,
        targets.daily_carbs,
    )
}

/// Split daily calories across meals
///
/// Uses the fixed tables for 3, 4, and 5 meals and an equal split otherwise.
/// Each share is rounded and the rounding residual is added to the last
/// meal, so the result always sums to `total_calories`.
///
/// # Errors
///
/// Returns an error if `meals_per_day` is 0
pub fn distribute_calories_by_meals(
    total_calories: f64,
    meals_per_day: u8,
    config: &NutritionConfig,
) -> AppResult<Vec<f64>> {
    if meals_per_day == 0 {
        return Err(AppError::out_of_range(
            "mealsPerDay",
            "meals per day must be at least 1",
        ));
    }

    let mut distribution: Vec<f64> = config.meal_distribution.table(meals_per_day).map_or_else(
        || {
            let per_meal = (total_calories / f64::from(meals_per_day)).round();
            vec![per_meal; usize::from(meals_per_day)]
        },
        |shares| {
            shares
                .iter()
                .map(|share| (total_calories * share).round())
                .collect()
        },
    );

    let residual = total_calories - distribution.iter().sum::<f64>();
    if let Some(last) = distribution.last_mut() {
        *last += residual;
    }

    Ok(distribution)
}

/// Named per-meal calories with each meal's share of the day
///
/// # Errors
///
/// Returns an error if `meals_per_day` is 0
pub fn meal_calorie_details(
    total_calories: f64,
    meals_per_day: u8,
    config: &NutritionConfig,
) -> AppResult<Vec<MealCalorieDetail>> {
    let distribution = distribute_calories_by_meals(total_calories, meals_per_day, config)?;

    Ok(distribution
        .into_iter()
        .enumerate()
        .map(|(index, calories)| MealCalorieDetail {
            name: meal_name(meals_per_day, index),
            calories,
            percentage: if total_calories == 0.0 {
                0.0
            } else {
                (calories / total_calories * 100.0).round()
            },
        })
        .collect())
}

fn meal_name(meals_per_day: u8, index: usize) -> String {
    let names: &[&str] = match meals_per_day {
        3 => &THREE_MEAL_NAMES,
        4 => &FOUR_MEAL_NAMES,
        5 => &FIVE_MEAL_NAMES,
        _ => &[],
    };
    names
        .get(index)
        .map_or_else(|| format!("食事{}", index + 1), |name| (*name).to_owned())
}
