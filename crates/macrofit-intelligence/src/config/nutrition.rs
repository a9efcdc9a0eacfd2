// ABOUTME: Nutrition configuration for energy, goal, macro, and meal calculations
// ABOUTME: Configures BMR coefficients, activity factors, energy balance, goal limits, and meal tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Planning Configuration
//!
//! Every constant the planning calculations depend on lives here with its
//! published default, so alternative coefficients can be injected in tests or
//! by a deployment without touching the algorithms.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Energy density of body weight: Wishnofsky (1958), 3500 kcal/lb (about 7700 kcal/kg)

use macrofit_core::constants::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, KCAL_PER_KG_BODY_WEIGHT,
};
use macrofit_core::models::MacroSplit;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Nutrition Planning Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Body-weight energy balance and automatic rates
    pub energy_balance: EnergyBalanceConfig,
    /// Plausibility limits for goal validation
    pub goal_limits: GoalLimitsConfig,
    /// Macronutrient split and energy densities
    pub macros: MacroConfig,
    /// Per-meal calorie distribution tables
    pub meal_distribution: MealDistributionConfig,
    /// Protein-shake nutrition per serving
    pub protein_intake: ProteinIntakeConfig,
}

impl NutritionConfig {
    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first section error found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.activity_factors.validate()?;
        self.energy_balance.validate()?;
        self.goal_limits.validate()?;
        self.macros.validate()?;
        self.meal_distribution.validate()
    }
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Sessions per week map onto the classic five activity levels:
/// 0 sedentary, 1-2 light, 3-4 moderate, 5-6 very active, 7+ extra active.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (no sessions): 1.2
    pub sedentary: f64,
    /// Lightly active: 1.375
    pub lightly_active: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extra active: 1.9
    pub extra_active: f64,
    /// Highest weekly session count still counted as lightly active (2)
    pub lightly_active_max_sessions: u32,
    /// Highest weekly session count still counted as moderately active (4)
    pub moderately_active_max_sessions: u32,
    /// Highest weekly session count still counted as very active (6)
    pub very_active_max_sessions: u32,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
            lightly_active_max_sessions: 2,
            moderately_active_max_sessions: 4,
            very_active_max_sessions: 6,
        }
    }
}

impl ActivityFactorsConfig {
    /// Validate that factors and session thresholds are strictly increasing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when either sequence is out of order
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            self.sedentary,
            self.lightly_active,
            self.moderately_active,
            self.very_active,
            self.extra_active,
        ];
        if factors[0] <= 0.0 || factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(format!(
                "activity factors must be positive and increasing, got {factors:?}"
            )));
        }

        if self.lightly_active_max_sessions == 0
            || self.lightly_active_max_sessions >= self.moderately_active_max_sessions
            || self.moderately_active_max_sessions >= self.very_active_max_sessions
        {
            return Err(ConfigError::InvalidRange(format!(
                "session thresholds must satisfy 0 < light < moderate < very, got {}/{}/{}",
                self.lightly_active_max_sessions,
                self.moderately_active_max_sessions,
                self.very_active_max_sessions
            )));
        }

        Ok(())
    }
}

/// Body-weight energy balance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyBalanceConfig {
    /// Energy stored in one kilogram of body weight (7700 kcal)
    pub kcal_per_kg: f64,
    /// Weight change above which the faster automatic rate applies (10 kg)
    pub large_change_threshold_kg: f64,
    /// Automatic rate for large changes (0.5 kg/week)
    pub large_change_rate_kg_per_week: f64,
    /// Automatic rate for small changes (0.3 kg/week)
    pub small_change_rate_kg_per_week: f64,
    /// Projection horizon when no weekly change can be derived (12 weeks)
    pub default_projection_weeks: u32,
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            kcal_per_kg: KCAL_PER_KG_BODY_WEIGHT,
            large_change_threshold_kg: 10.0,
            large_change_rate_kg_per_week: 0.5,
            small_change_rate_kg_per_week: 0.3,
            default_projection_weeks: 12,
        }
    }
}

impl EnergyBalanceConfig {
    /// Validate energy density and rates
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for non-positive values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("kcal_per_kg", self.kcal_per_kg),
            ("large_change_threshold_kg", self.large_change_threshold_kg),
            ("large_change_rate_kg_per_week", self.large_change_rate_kg_per_week),
            ("small_change_rate_kg_per_week", self.small_change_rate_kg_per_week),
        ];
        for (name, value) in values {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.default_projection_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default_projection_weeks must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Plausibility limits applied by goal validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalLimitsConfig {
    /// Minimum intake as a fraction of BMR (0.8)
    pub min_bmr_fraction: f64,
    /// Maximum daily intake when gaining weight (8000 kcal)
    pub max_gain_calories: f64,
    /// Maximum intake as a fraction of TDEE when losing weight (1.5)
    pub max_loss_tdee_fraction: f64,
    /// Shortest accepted goal duration (1 week)
    pub min_duration_weeks: f64,
    /// Longest accepted goal duration (104 weeks)
    pub max_duration_weeks: f64,
    /// Youngest age the BMR equation is used for (10)
    pub min_age: u32,
    /// Oldest age the BMR equation is used for (100)
    pub max_age: u32,
    /// Weight difference treated as "no change" (0.1 kg)
    pub same_weight_tolerance_kg: f64,
}

impl Default for GoalLimitsConfig {
    fn default() -> Self {
        Self {
            min_bmr_fraction: 0.8,
            max_gain_calories: 8000.0,
            max_loss_tdee_fraction: 1.5,
            min_duration_weeks: 1.0,
            max_duration_weeks: 104.0,
            min_age: 10,
            max_age: 100,
            same_weight_tolerance_kg: 0.1,
        }
    }
}

impl GoalLimitsConfig {
    /// Validate bounds ordering
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` when a lower bound exceeds its upper bound
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_duration_weeks > self.max_duration_weeks {
            return Err(ConfigError::InvalidRange(format!(
                "duration bounds {}..{} are inverted",
                self.min_duration_weeks, self.max_duration_weeks
            )));
        }
        if self.min_age > self.max_age {
            return Err(ConfigError::InvalidRange(format!(
                "age bounds {}..{} are inverted",
                self.min_age, self.max_age
            )));
        }
        if !(0.0..=1.0).contains(&self.min_bmr_fraction) {
            return Err(ConfigError::ValueOutOfRange(format!(
                "min_bmr_fraction must be between 0.0 and 1.0, got {}",
                self.min_bmr_fraction
            )));
        }
        Ok(())
    }
}

/// Macronutrient split and energy densities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroConfig {
    /// Split used when the profile has none (30/25/45)
    pub default_split: MacroSplit,
    /// Protein energy density (4 kcal/g)
    pub kcal_per_gram_protein: f64,
    /// Fat energy density (9 kcal/g)
    pub kcal_per_gram_fat: f64,
    /// Carbohydrate energy density (4 kcal/g)
    pub kcal_per_gram_carbs: f64,
}

impl Default for MacroConfig {
    fn default() -> Self {
        Self {
            default_split: MacroSplit {
                protein: 30.0,
                fat: 25.0,
                carbs: 45.0,
            },
            kcal_per_gram_protein: KCAL_PER_GRAM_PROTEIN,
            kcal_per_gram_fat: KCAL_PER_GRAM_FAT,
            kcal_per_gram_carbs: KCAL_PER_GRAM_CARBS,
        }
    }
}

impl MacroConfig {
    /// Validate the default split and densities
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if the split does not sum to 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.default_split.total();
        if (sum - 100.0).abs() > 1e-6 {
            return Err(ConfigError::InvalidWeights(format!(
                "default macro percentages must sum to 100, got {sum}"
            )));
        }
        if self.kcal_per_gram_protein <= 0.0
            || self.kcal_per_gram_fat <= 0.0
            || self.kcal_per_gram_carbs <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "macronutrient energy densities must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Share of daily calories per meal, in eating order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Breakfast / lunch / dinner: 25/35/40
    pub three_meals: Vec<f64>,
    /// Breakfast / lunch / snack / dinner: 20/30/15/35
    pub four_meals: Vec<f64>,
    /// Breakfast / snack / lunch / snack / dinner: 20/10/25/15/30
    pub five_meals: Vec<f64>,
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            three_meals: vec![0.25, 0.35, 0.40],
            four_meals: vec![0.20, 0.30, 0.15, 0.35],
            five_meals: vec![0.20, 0.10, 0.25, 0.15, 0.30],
        }
    }
}

impl MealDistributionConfig {
    /// Fixed table for this meal count, `None` means equal split
    #[must_use]
    pub fn table(&self, meals_per_day: u8) -> Option<&[f64]> {
        match meals_per_day {
            3 => Some(self.three_meals.as_slice()),
            4 => Some(self.four_meals.as_slice()),
            5 => Some(self.five_meals.as_slice()),
            _ => None,
        }
    }

    /// Validate table lengths and sums
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` when a table has the wrong length or does not sum to 1
    pub fn validate(&self) -> Result<(), ConfigError> {
        let tables = [
            ("three_meals", 3, &self.three_meals),
            ("four_meals", 4, &self.four_meals),
            ("five_meals", 5, &self.five_meals),
        ];
        for (name, expected_len, table) in tables {
            if table.len() != expected_len {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} must have {expected_len} entries, got {}",
                    table.len()
                )));
            }
            let sum: f64 = table.iter().sum();
            if (sum - 1.0).abs() > 1e-9 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{name} proportions must sum to 1.0, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

/// Nutrition of one protein shake (30 g powder + 200 ml milk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinIntakeConfig {
    /// Calories per serving (120 kcal)
    pub kcal_per_serving: f64,
    /// Protein per serving (24 g)
    pub protein_g_per_serving: f64,
    /// Milk per serving (200 ml)
    pub milk_ml_per_serving: f64,
}

impl Default for ProteinIntakeConfig {
    fn default() -> Self {
        Self {
            kcal_per_serving: 120.0,
            protein_g_per_serving: 24.0,
            milk_ml_per_serving: 200.0,
        }
    }
}
