// ABOUTME: Derived nutrition records: daily/weekly targets, per-meal calories, weight projections
// ABOUTME: Recomputed from the profile on every change and serialized camelCase for the UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;

/// Daily and weekly calorie and macronutrient targets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    /// Daily calories (kcal)
    pub daily_calories: f64,
    /// Daily protein (g)
    pub daily_protein: f64,
    /// Daily fat (g)
    pub daily_fat: f64,
    /// Daily carbohydrates (g)
    pub daily_carbs: f64,
    /// Weekly calories (kcal)
    pub weekly_calories: f64,
    /// Weekly protein (g)
    pub weekly_protein: f64,
    /// Weekly fat (g)
    pub weekly_fat: f64,
    /// Weekly carbohydrates (g)
    pub weekly_carbs: f64,
}

impl NutritionTargets {
    /// Build targets from daily values; weekly values are daily x 7
    #[must_use]
    pub fn from_daily(calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        Self {
            daily_calories: calories,
            daily_protein: protein,
            daily_fat: fat,
            daily_carbs: carbs,
            weekly_calories: calories * DAYS_PER_WEEK,
            weekly_protein: protein * DAYS_PER_WEEK,
            weekly_fat: fat * DAYS_PER_WEEK,
            weekly_carbs: carbs * DAYS_PER_WEEK,
        }
    }
}

/// Calories assigned to one meal of the day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealCalorieDetail {
    /// Display name of the meal
    pub name: String,
    /// Calories for this meal (kcal)
    pub calories: f64,
    /// Share of the daily total, rounded to a whole percent
    pub percentage: f64,
}

/// One week of the projected weight trajectory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightProjectionPoint {
    /// Week index, starting at 0
    pub week_number: u32,
    /// Calendar date of this point
    pub date: NaiveDate,
    /// Projected body weight (kg)
    pub projected_weight: f64,
}

/// Projected weight trajectory towards the target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeightProjection {
    /// Date the target is expected to be reached
    pub target_achievement_date: NaiveDate,
    /// Week the target is expected to be reached
    pub target_achievement_week: u32,
    /// Constant weekly change (kg/week, negative for loss)
    pub weekly_weight_change: f64,
    /// Week-by-week points starting at week 0
    pub projections: Vec<WeightProjectionPoint>,
}
