// ABOUTME: Physiological and calendar constants for energy-balance calculations
// ABOUTME: kcal per kg of body weight, kcal per gram of each macronutrient, days per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy-balance constants.

/// Energy content of one kilogram of body weight (kcal)
pub const KCAL_PER_KG_BODY_WEIGHT: f64 = 7700.0;

/// Atwater factor for protein (kcal/g)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Atwater factor for fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Atwater factor for carbohydrates (kcal/g)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Days in a planning week
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Default number of meals per day when the profile does not say
pub const DEFAULT_MEALS_PER_DAY: u8 = 3;
