// ABOUTME: Energy model: Mifflin-St Jeor BMR, activity level lookup, and TDEE
// ABOUTME: Pure functions over a validated profile snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy Model
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). *Exercise Physiology*.

use macrofit_core::models::{Gender, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ActivityFactorsConfig, BmrConfig, NutritionConfig};

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// No structured exercise
    Sedentary,
    /// 1-2 sessions per week
    LightlyActive,
    /// 3-4 sessions per week
    ModeratelyActive,
    /// 5-6 sessions per week
    VeryActive,
    /// 7 or more sessions per week
    ExtraActive,
}

impl ActivityLevel {
    /// Classify a weekly session count
    #[must_use]
    pub const fn from_sessions(sessions_per_week: u32, config: &ActivityFactorsConfig) -> Self {
        if sessions_per_week == 0 {
            Self::Sedentary
        } else if sessions_per_week <= config.lightly_active_max_sessions {
            Self::LightlyActive
        } else if sessions_per_week <= config.moderately_active_max_sessions {
            Self::ModeratelyActive
        } else if sessions_per_week <= config.very_active_max_sessions {
            Self::VeryActive
        } else {
            Self::ExtraActive
        }
    }

    /// Multiplier applied to BMR for this level
    #[must_use]
    pub const fn factor(self, config: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::Sedentary => config.sedentary,
            Self::LightlyActive => config.lightly_active,
            Self::ModeratelyActive => config.moderately_active,
            Self::VeryActive => config.very_active,
            Self::ExtraActive => config.extra_active,
        }
    }
}

/// BMR, activity, and TDEE for one profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnergyEstimate {
    /// Basal metabolic rate (kcal/day, unrounded)
    pub bmr: f64,
    /// Activity classification
    pub activity_level: ActivityLevel,
    /// Multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Total daily energy expenditure (kcal/day, rounded)
    pub tdee: f64,
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &BmrConfig) -> f64 {
    let weight_component = config.msj_weight_coef * profile.weight;
    let height_component = config.msj_height_coef * profile.height;
    let age_component = config.msj_age_coef * f64::from(profile.age);

    let gender_constant = match profile.gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Activity multiplier for a weekly session count
///
/// Step function: 0 -> 1.2, 1-2 -> 1.375, 3-4 -> 1.55, 5-6 -> 1.725, 7+ -> 1.9
#[must_use]
pub const fn activity_multiplier(sessions_per_week: u32, config: &ActivityFactorsConfig) -> f64 {
    ActivityLevel::from_sessions(sessions_per_week, config).factor(config)
}

/// Calculate Total Daily Energy Expenditure, rounded to a whole kcal
///
/// Formula: TDEE = round(BMR x activity multiplier)
#[must_use]
pub fn calculate_tdee(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    estimate_energy(profile, config).tdee
}

/// BMR, activity classification, and TDEE in one pass
#[must_use]
pub fn estimate_energy(profile: &UserProfile, config: &NutritionConfig) -> EnergyEstimate {
    let bmr = calculate_bmr(profile, &config.bmr);
    let activity_level =
        ActivityLevel::from_sessions(profile.exercise_frequency, &config.activity_factors);
    let activity_multiplier = activity_level.factor(&config.activity_factors);
    let tdee = (bmr * activity_multiplier).round();

    debug!(
        bmr,
        ?activity_level,
        activity_multiplier,
        tdee,
        "Estimated energy expenditure"
    );

    EnergyEstimate {
        bmr,
        activity_level,
        activity_multiplier,
        tdee,
    }
}
