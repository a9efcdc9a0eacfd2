// ABOUTME: Goal solver converting between goal duration and daily calorie target
// ABOUTME: Also produces advisory plausibility findings for a user's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Solver
//!
//! Both directions rest on the same energy balance: reaching the target needs
//! `(target - weight) x 7700` kcal in total, spread evenly over the goal's days.
//!
//! `validate_goal` never fails. It reports findings and leaves the decision to
//! block or proceed with the caller.

use std::fmt;
use std::mem;

use macrofit_core::constants::DAYS_PER_WEEK;
use macrofit_core::errors::AppError;
use macrofit_core::models::{GoalSettingMethod, ResolvedGoal, UserProfile};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::config::NutritionConfig;
use crate::energy::estimate_energy;

/// Arithmetic infeasibility in the goal solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GoalSolverError {
    /// Intake equals maintenance, so no duration reaches the target
    #[error("daily calories equal maintenance calories, so the goal duration is undefined")]
    DivisionUndefined,
    /// A zero-week goal has no daily adjustment
    #[error("goal duration must be at least one week")]
    ZeroDuration,
}

impl From<GoalSolverError> for AppError {
    fn from(error: GoalSolverError) -> Self {
        Self::calculation_undefined(error.to_string()).with_source(error)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Daily calories that reach the target weight in `weeks` weeks
///
/// `round(tdee + (target - weight) x 7700 / (weeks x 7))`
///
/// # Errors
///
/// Returns `GoalSolverError::ZeroDuration` when `weeks` is 0
pub fn calories_from_duration(
    profile: &UserProfile,
    weeks: u32,
    config: &NutritionConfig,
) -> Result<f64, GoalSolverError> {
    if weeks == 0 {
        return Err(GoalSolverError::ZeroDuration);
    }

    let tdee = estimate_energy(profile, config).tdee;
    let total_adjustment = profile.weight_delta() * config.energy_balance.kcal_per_kg;
    let daily_adjustment = total_adjustment / (f64::from(weeks) * DAYS_PER_WEEK);
    let calories = (tdee + daily_adjustment).round();

    debug!(weeks, tdee, daily_adjustment, calories, "Solved calories from duration");
    Ok(calories)
}

/// Weeks needed to reach the target weight eating `daily_calories` per day
///
/// Rounded to one decimal. Negative when the intake moves weight away from
/// the target.
///
/// # Errors
///
/// Returns `GoalSolverError::DivisionUndefined` when `daily_calories` equals TDEE
pub fn duration_from_calories(
    profile: &UserProfile,
    daily_calories: f64,
    config: &NutritionConfig,
) -> Result<f64, GoalSolverError> {
    let tdee = estimate_energy(profile, config).tdee;
    let daily_adjustment = daily_calories - tdee;
    if daily_adjustment == 0.0 {
        return Err(GoalSolverError::DivisionUndefined);
    }

    let total_adjustment = profile.weight_delta() * config.energy_balance.kcal_per_kg;
    let weeks = round_to_tenth(total_adjustment / (daily_adjustment * DAYS_PER_WEEK));

    debug!(daily_calories, tdee, daily_adjustment, weeks, "Solved duration from calories");
    Ok(weeks)
}

/// One advisory finding about a goal
#[derive(Debug, Clone, PartialEq)]
pub enum GoalFinding {
    /// Target and current weight are the same
    IdenticalWeight,
    /// Age outside the range the BMR equation is meant for
    AgeOutOfRange {
        /// Age given
        age: u32,
        /// Youngest accepted age
        min: u32,
        /// Oldest accepted age
        max: u32,
    },
    /// Chosen duration needs intake below the BMR floor
    DurationNeedsStarvation {
        /// Implied daily calories
        calories: f64,
        /// BMR floor
        floor: f64,
        /// Fraction of BMR the floor represents
        bmr_fraction: f64,
    },
    /// Chosen duration needs intake above the weight-gain ceiling
    DurationNeedsExcessiveGain {
        /// Implied daily calories
        calories: f64,
        /// Absolute ceiling
        ceiling: f64,
    },
    /// Chosen duration needs intake above the maintenance ceiling
    DurationNeedsExcessiveIntake {
        /// Implied daily calories
        calories: f64,
        /// Ceiling derived from TDEE
        ceiling: f64,
        /// Fraction of TDEE the ceiling represents
        tdee_fraction: f64,
    },
    /// Duration shorter than the minimum
    DurationTooShort {
        /// Weeks given
        weeks: f64,
        /// Shortest accepted duration
        min_weeks: f64,
    },
    /// Duration longer than the maximum
    DurationTooLong {
        /// Weeks given
        weeks: f64,
        /// Longest accepted duration
        max_weeks: f64,
    },
    /// Daily calories below the BMR floor
    CaloriesBelowFloor {
        /// Calories given
        calories: f64,
        /// BMR floor
        floor: f64,
        /// Fraction of BMR the floor represents
        bmr_fraction: f64,
    },
    /// Daily calories above the weight-gain ceiling
    CaloriesAboveGainCeiling {
        /// Calories given
        calories: f64,
        /// Absolute ceiling
        ceiling: f64,
    },
    /// Daily calories above the maintenance ceiling
    CaloriesAboveIntakeCeiling {
        /// Calories given
        calories: f64,
        /// Ceiling derived from TDEE
        ceiling: f64,
        /// Fraction of TDEE the ceiling represents
        tdee_fraction: f64,
    },
    /// Calories move weight away from the target
    WrongDirection {
        /// Implied weeks (negative)
        weeks: f64,
    },
    /// Calories reach the target only after the maximum duration
    ImpliedDurationTooLong {
        /// Implied weeks
        weeks: f64,
        /// Longest accepted duration
        max_weeks: f64,
    },
    /// Calories equal maintenance so no duration can be computed
    DurationUndefined,
}

/// `0.8` -> `80%`
fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Whole years when the span is a multiple of 52 weeks, otherwise weeks
fn span(weeks: f64) -> String {
    let years = weeks / 52.0;
    let (count, unit) = if weeks >= 52.0 && years.fract().abs() < f64::EPSILON {
        (years, "year")
    } else {
        (weeks, "week")
    };
    let plural = if (count - 1.0).abs() < f64::EPSILON { "" } else { "s" };
    format!("{count} {unit}{plural}")
}

impl fmt::Display for GoalFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdenticalWeight => write!(f, "Target weight is the same as current weight"),
            Self::AgeOutOfRange { min, max, .. } => {
                write!(f, "Age must be between {min} and {max}")
            }
            Self::DurationNeedsStarvation {
                floor, bmr_fraction, ..
            } => write!(
                f,
                "Goal duration is too short: it requires eating below {} of BMR ({floor:.0} kcal)",
                percent(*bmr_fraction)
            ),
            Self::DurationNeedsExcessiveGain { ceiling, .. } => write!(
                f,
                "Goal duration is too short: it requires eating more than {ceiling:.0} kcal per day"
            ),
            Self::DurationNeedsExcessiveIntake {
                ceiling,
                tdee_fraction,
                ..
            } => write!(
                f,
                "Goal duration is too short: it requires eating more than {} of maintenance ({ceiling:.0} kcal)",
                percent(*tdee_fraction)
            ),
            Self::DurationTooShort { min_weeks, .. } => {
                write!(f, "Goal duration must be at least {}", span(*min_weeks))
            }
            Self::DurationTooLong { max_weeks, .. } => {
                write!(f, "Goal duration must be within {}", span(*max_weeks))
            }
            Self::CaloriesBelowFloor {
                floor, bmr_fraction, ..
            } => write!(
                f,
                "Daily calories are below {} of BMR ({floor:.0} kcal), which may be harmful",
                percent(*bmr_fraction)
            ),
            Self::CaloriesAboveGainCeiling { ceiling, .. } => write!(
                f,
                "Daily calories exceed {ceiling:.0} kcal, which is unrealistic"
            ),
            Self::CaloriesAboveIntakeCeiling {
                ceiling,
                tdee_fraction,
                ..
            } => write!(
                f,
                "Daily calories exceed {} of maintenance ({ceiling:.0} kcal), which causes excessive weight gain",
                percent(*tdee_fraction)
            ),
            Self::WrongDirection { .. } => write!(
                f,
                "These daily calories move weight away from the target"
            ),
            Self::ImpliedDurationTooLong { max_weeks, .. } => write!(
                f,
                "These daily calories take more than {} to reach the target",
                span(*max_weeks)
            ),
            Self::DurationUndefined => write!(
                f,
                "Goal duration cannot be calculated from these daily calories"
            ),
        }
    }
}

/// Outcome of goal validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalValidation {
    /// Findings in the order they were detected
    pub findings: Vec<GoalFinding>,
}

impl GoalValidation {
    /// True when there are no findings
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Human-readable messages, one per finding
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.findings.iter().map(ToString::to_string).collect()
    }

    /// Whether a finding of the same kind is present
    #[must_use]
    pub fn contains(&self, finding: &GoalFinding) -> bool {
        self.findings
            .iter()
            .any(|found| mem::discriminant(found) == mem::discriminant(finding))
    }
}

impl Serialize for GoalValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire {
            is_valid: bool,
            errors: Vec<String>,
        }

        Wire {
            is_valid: self.is_valid(),
            errors: self.errors(),
        }
        .serialize(serializer)
    }
}

/// Check a goal for plausibility
///
/// Covers identical weights, age range, and the mode-specific calorie and
/// duration limits. Never fails; an undefined duration becomes a finding.
#[must_use]
pub fn validate_goal(profile: &UserProfile, config: &NutritionConfig) -> GoalValidation {
    let limits = &config.goal_limits;
    let energy = estimate_energy(profile, config);
    let floor = energy.bmr * limits.min_bmr_fraction;
    let gaining = profile.target_weight > profile.weight;
    let ceiling = if gaining {
        limits.max_gain_calories
    } else {
        energy.tdee * limits.max_loss_tdee_fraction
    };

    let mut findings = Vec::new();

    if profile.weight_delta().abs() < limits.same_weight_tolerance_kg {
        findings.push(GoalFinding::IdenticalWeight);
    }

    if !(limits.min_age..=limits.max_age).contains(&profile.age) {
        findings.push(GoalFinding::AgeOutOfRange {
            age: profile.age,
            min: limits.min_age,
            max: limits.max_age,
        });
    }

    match profile.goal() {
        ResolvedGoal::Duration { weeks } => {
            // weeks > 0 here, so the solver cannot fail
            if let Ok(calories) = calories_from_duration(profile, weeks, config) {
                if calories < floor {
                    findings.push(GoalFinding::DurationNeedsStarvation {
                        calories,
                        floor,
                        bmr_fraction: limits.min_bmr_fraction,
                    });
                }
                if calories > ceiling {
                    findings.push(if gaining {
                        GoalFinding::DurationNeedsExcessiveGain { calories, ceiling }
                    } else {
                        GoalFinding::DurationNeedsExcessiveIntake {
                            calories,
                            ceiling,
                            tdee_fraction: limits.max_loss_tdee_fraction,
                        }
                    });
                }
            }
            let weeks = f64::from(weeks);
            if weeks < limits.min_duration_weeks {
                findings.push(GoalFinding::DurationTooShort {
                    weeks,
                    min_weeks: limits.min_duration_weeks,
                });
            }
            if weeks > limits.max_duration_weeks {
                findings.push(GoalFinding::DurationTooLong {
                    weeks,
                    max_weeks: limits.max_duration_weeks,
                });
            }
        }
        ResolvedGoal::Calories { daily } => {
            if daily < floor {
                findings.push(GoalFinding::CaloriesBelowFloor {
                    calories: daily,
                    floor,
                    bmr_fraction: limits.min_bmr_fraction,
                });
            }
            if daily > ceiling {
                findings.push(if gaining {
                    GoalFinding::CaloriesAboveGainCeiling {
                        calories: daily,
                        ceiling,
                    }
                } else {
                    GoalFinding::CaloriesAboveIntakeCeiling {
                        calories: daily,
                        ceiling,
                        tdee_fraction: limits.max_loss_tdee_fraction,
                    }
                });
            }
            match duration_from_calories(profile, daily, config) {
                Ok(weeks) if weeks < 0.0 => findings.push(GoalFinding::WrongDirection { weeks }),
                Ok(weeks) if weeks > limits.max_duration_weeks => {
                    findings.push(GoalFinding::ImpliedDurationTooLong {
                        weeks,
                        max_weeks: limits.max_duration_weeks,
                    });
                }
                Ok(_) => {}
                Err(_) => findings.push(GoalFinding::DurationUndefined),
            }
        }
        ResolvedGoal::Auto => {
            // An explicit zero-week duration resolves to Auto but is still a user error
            if profile.goal_setting_method == Some(GoalSettingMethod::Duration)
                && profile.target_duration_weeks == Some(0)
            {
                findings.push(GoalFinding::DurationTooShort {
                    weeks: 0.0,
                    min_weeks: limits.min_duration_weeks,
                });
            }
        }
    }

    debug!(count = findings.len(), "Validated goal");
    GoalValidation { findings }
}
