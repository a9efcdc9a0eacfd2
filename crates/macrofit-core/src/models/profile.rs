// ABOUTME: User profile snapshot: body metrics, goal selection, and meal preferences
// ABOUTME: Resolves the goal-setting method into a single typed goal for the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MEALS_PER_DAY;
use crate::errors::{AppError, AppResult};

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

/// How the user chose to express their goal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GoalSettingMethod {
    /// Rate chosen automatically from the size of the weight change
    #[default]
    #[serde(rename = "none", alias = "auto")]
    Auto,
    /// User fixed the number of weeks
    Duration,
    /// User fixed the daily calorie intake
    Calories,
}

/// Goal after resolving the method against the fields actually provided
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedGoal {
    /// Automatic weekly rate
    Auto,
    /// Reach the target in this many weeks
    Duration {
        /// Target duration in weeks
        weeks: u32,
    },
    /// Eat this many kcal per day
    Calories {
        /// Daily intake in kcal
        daily: f64,
    },
}

/// Protein / fat / carbohydrate percentages of daily calories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroSplit {
    /// Protein share (%)
    pub protein: f64,
    /// Fat share (%)
    pub fat: f64,
    /// Carbohydrate share (%)
    pub carbs: f64,
}

impl MacroSplit {
    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein + self.fat + self.carbs
    }
}

/// Immutable snapshot of the user's inputs
///
/// Ranges (height, age 10-100, 0-14 sessions, 1-104 weeks, 800-8000 kcal) are
/// enforced by the form collaborator before a profile reaches the calculators.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimetres
    pub height: f64,
    /// Current body weight in kilograms
    pub weight: f64,
    /// Age in years
    pub age: u32,
    /// Biological sex
    pub gender: Gender,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat_percentage: f64,
    /// Exercise sessions per week
    #[serde(default)]
    pub exercise_frequency: u32,
    /// Target body weight in kilograms
    pub target_weight: f64,
    /// Goal-setting method; absent or null means automatic
    #[serde(default)]
    pub goal_setting_method: Option<GoalSettingMethod>,
    /// Target duration in weeks (duration mode)
    #[serde(default)]
    pub target_duration_weeks: Option<u32>,
    /// Target daily calories (calories mode)
    #[serde(default)]
    pub target_daily_calories: Option<f64>,
    /// Custom macro split
    #[serde(default, alias = "pfcBalance")]
    pub macro_split: Option<MacroSplit>,
    /// Meals per day
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u8,
    /// Preferred protein sources
    #[serde(default)]
    pub protein_sources: Vec<String>,
    /// Food allergies
    #[serde(default)]
    pub allergies: Vec<String>,
    /// Protein shakes per day
    #[serde(default)]
    pub protein_intake_frequency: u8,
    /// Preferred breakfast staple
    #[serde(default)]
    pub breakfast_staple: Option<String>,
}

/// Most exercise sessions per week the activity table accepts
const MAX_EXERCISE_SESSIONS: u32 = 14;

/// Allowed deviation of a macro split total from 100%
const MACRO_SPLIT_TOLERANCE: f64 = 0.5;

/// Longest duration goal accepted at all (ten years)
///
/// Anything past two years is already flagged by goal validation; this bound
/// keeps the weekly projection finite.
pub const MAX_GOAL_DURATION_WEEKS: u32 = 520;

const fn default_meals_per_day() -> u8 {
    DEFAULT_MEALS_PER_DAY
}

impl UserProfile {
    /// Resolve the goal-setting method against the provided fields
    ///
    /// A method whose value is missing or zero falls back to [`ResolvedGoal::Auto`].
    #[must_use]
    pub fn goal(&self) -> ResolvedGoal {
        match self.goal_setting_method.unwrap_or_default() {
            GoalSettingMethod::Auto => ResolvedGoal::Auto,
            GoalSettingMethod::Duration => self
                .target_duration_weeks
                .filter(|weeks| *weeks > 0)
                .map_or(ResolvedGoal::Auto, |weeks| ResolvedGoal::Duration { weeks }),
            GoalSettingMethod::Calories => self
                .target_daily_calories
                .filter(|daily| daily.is_finite() && *daily > 0.0)
                .map_or(ResolvedGoal::Auto, |daily| ResolvedGoal::Calories { daily }),
        }
    }

    /// Signed weight change to reach the target (kg, negative for loss)
    #[must_use]
    pub fn weight_delta(&self) -> f64 {
        self.target_weight - self.weight
    }

    /// Check the fields the calculators divide or multiply by
    ///
    /// Goal plausibility is not checked here; that produces findings, not
    /// errors.
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error naming the first offending field
    pub fn validate_inputs(&self) -> AppResult<()> {
        for (field, value) in [
            ("height", self.height),
            ("weight", self.weight),
            ("targetWeight", self.target_weight),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::out_of_range(
                    field,
                    format!("{field} must be a positive number, got {value}"),
                ));
            }
        }

        if self.exercise_frequency > MAX_EXERCISE_SESSIONS {
            return Err(AppError::out_of_range(
                "exerciseFrequency",
                format!(
                    "exerciseFrequency must be at most {MAX_EXERCISE_SESSIONS} sessions per week, got {}",
                    self.exercise_frequency
                ),
            ));
        }

        if let ResolvedGoal::Duration { weeks } = self.goal() {
            if weeks > MAX_GOAL_DURATION_WEEKS {
                return Err(AppError::out_of_range(
                    "targetDurationWeeks",
                    format!(
                        "targetDurationWeeks must be at most {MAX_GOAL_DURATION_WEEKS}, got {weeks}"
                    ),
                ));
            }
        }

        if self.meals_per_day == 0 {
            return Err(AppError::out_of_range(
                "mealsPerDay",
                "mealsPerDay must be at least 1",
            ));
        }

        if let Some(split) = self.macro_split {
            let parts = [split.protein, split.fat, split.carbs];
            if parts.iter().any(|part| !(part.is_finite() && *part >= 0.0))
                || (split.total() - 100.0).abs() > MACRO_SPLIT_TOLERANCE
            {
                return Err(AppError::out_of_range(
                    "macroSplit",
                    format!("macroSplit must sum to 100%, got {}", split.total()),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn parse(json: &str) -> UserProfile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_profile_defaults() {
        let profile = parse(
            r#"{"height":170,"weight":80,"age":30,"gender":"male","targetWeight":75}"#,
        );
        assert_eq!(profile.meals_per_day, 3);
        assert_eq!(profile.protein_intake_frequency, 0);
        assert_eq!(profile.goal(), ResolvedGoal::Auto);
        assert!((profile.weight_delta() + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_duration_goal_resolution() {
        let profile = parse(
            r#"{"height":170,"weight":80,"age":30,"gender":"male","targetWeight":75,
                "goalSettingMethod":"duration","targetDurationWeeks":12}"#,
        );
        assert_eq!(profile.goal(), ResolvedGoal::Duration { weeks: 12 });
    }

    #[test]
    fn test_method_without_value_falls_back_to_auto() {
        let profile = parse(
            r#"{"height":170,"weight":80,"age":30,"gender":"female","targetWeight":75,
                "goalSettingMethod":"calories"}"#,
        );
        assert_eq!(profile.goal(), ResolvedGoal::Auto);
    }

    #[test]
    fn test_pfc_balance_alias_and_none_method() {
        let profile = parse(
            r#"{"height":160,"weight":55,"age":28,"gender":"female","targetWeight":52,
                "goalSettingMethod":"none","pfcBalance":{"protein":35,"fat":20,"carbs":45}}"#,
        );
        assert_eq!(profile.goal_setting_method, Some(GoalSettingMethod::Auto));
        let split = profile.macro_split.unwrap();
        assert!((split.total() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_input_validation() {
        let base = parse(
            r#"{"height":170,"weight":80,"age":30,"gender":"male","targetWeight":75}"#,
        );
        assert!(base.validate_inputs().is_ok());

        let no_height = UserProfile {
            height: 0.0,
            ..base.clone()
        };
        let error = no_height.validate_inputs().unwrap_err();
        assert_eq!(error.context.resource.as_deref(), Some("height"));

        let lopsided = UserProfile {
            macro_split: Some(MacroSplit {
                protein: 50.0,
                fat: 30.0,
                carbs: 30.0,
            }),
            ..base.clone()
        };
        assert!(lopsided.validate_inputs().is_err());

        let fasting = UserProfile {
            meals_per_day: 0,
            ..base.clone()
        };
        assert!(fasting.validate_inputs().is_err());
    }

    #[test]
    fn test_duration_goal_hard_cap() {
        let decade = parse(
            r#"{"height":170,"weight":80,"age":30,"gender":"male","targetWeight":75,
                "goalSettingMethod":"duration","targetDurationWeeks":520}"#,
        );
        assert!(decade.validate_inputs().is_ok());

        let endless = UserProfile {
            target_duration_weeks: Some(20_000_000),
            ..decade
        };
        let error = endless.validate_inputs().unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.resource.as_deref(), Some("targetDurationWeeks"));

        // Ignored unless the duration method is selected
        let stale = UserProfile {
            goal_setting_method: None,
            ..endless
        };
        assert!(stale.validate_inputs().is_ok());
    }
}
