// ABOUTME: Week-by-week weight trajectory from a constant daily calorie surplus or deficit
// ABOUTME: Determines the horizon from the goal mode and the target-achievement week and date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weight Projection
//!
//! The weekly change is constant: `(target_calories - tdee) x 7 / 7700` kg.
//!
//! The horizon depends on the goal mode:
//! - duration: the chosen number of weeks
//! - calories: the solved duration rounded up, capped at 104 weeks
//! - auto: the theoretical number of weeks rounded up
//!
//! Only auto mode stops at the week the target is crossed. Duration and
//! calories modes always emit the full horizon and report it as the
//! achievement week, whether or not the arithmetic reaches the target by
//! then. Callers comparing the last projected weight with the target should
//! expect a gap in those modes.

use chrono::{Duration, NaiveDate};
use macrofit_core::constants::DAYS_PER_WEEK;
use macrofit_core::models::{ResolvedGoal, UserProfile, WeightProjection, WeightProjectionPoint};
use tracing::{debug, warn};

use crate::config::NutritionConfig;
use crate::energy::estimate_energy;
use crate::goal_solver::duration_from_calories;
use crate::macro_allocator::calculate_target_calories;

/// Horizon and stopping rule for one projection
#[derive(Debug, Clone, Copy, PartialEq)]
struct Horizon {
    max_weeks: u32,
    stop_at_target: bool,
}

fn whole_weeks(weeks: f64) -> u32 {
    if weeks.is_finite() && weeks > 0.0 {
        weeks.ceil() as u32
    } else {
        0
    }
}

fn horizon(
    profile: &UserProfile,
    weekly_change: f64,
    config: &NutritionConfig,
) -> Horizon {
    let default_weeks = config.energy_balance.default_projection_weeks;
    let theoretical_weeks = if weekly_change == 0.0 {
        f64::from(default_weeks)
    } else {
        (profile.weight_delta() / weekly_change).abs()
    };
    let cap = whole_weeks(config.goal_limits.max_duration_weeks);

    match profile.goal() {
        ResolvedGoal::Duration { weeks } => Horizon {
            max_weeks: weeks,
            stop_at_target: false,
        },
        ResolvedGoal::Calories { daily } => {
            let max_weeks = match duration_from_calories(profile, daily, config) {
                Ok(weeks) => whole_weeks(weeks).min(cap),
                Err(error) => {
                    warn!(%error, "Falling back to theoretical projection horizon");
                    whole_weeks(theoretical_weeks)
                }
            };
            Horizon {
                max_weeks,
                stop_at_target: false,
            }
        }
        ResolvedGoal::Auto => Horizon {
            max_weeks: whole_weeks(theoretical_weeks),
            stop_at_target: true,
        },
    }
}

fn reached_target(projected: f64, target: f64, weekly_change: f64) -> bool {
    (weekly_change > 0.0 && projected >= target) || (weekly_change < 0.0 && projected <= target)
}

/// Project body weight week by week starting at `start`
///
/// Week 0 is the current weight on `start`; week `n` is `start + 7n` days.
#[must_use]
pub fn project_weight(
    profile: &UserProfile,
    config: &NutritionConfig,
    start: NaiveDate,
) -> WeightProjection {
    let tdee = estimate_energy(profile, config).tdee;
    let target_calories = calculate_target_calories(profile, config);
    let weekly_change =
        (target_calories - tdee) * DAYS_PER_WEEK / config.energy_balance.kcal_per_kg;
    let Horizon {
        max_weeks,
        stop_at_target,
    } = horizon(profile, weekly_change, config);

    let mut projections = Vec::new();
    let mut achievement_week = max_weeks;

    for week in 0..=max_weeks {
        // Past the last representable calendar date the sequence just ends
        let Some(date) = start.checked_add_signed(Duration::weeks(i64::from(week))) else {
            warn!(week, "Projection date out of range, truncating");
            achievement_week = week.saturating_sub(1);
            break;
        };
        let projected_weight = weekly_change.mul_add(f64::from(week), profile.weight);
        projections.push(WeightProjectionPoint {
            week_number: week,
            date,
            projected_weight,
        });

        if stop_at_target && reached_target(projected_weight, profile.target_weight, weekly_change)
        {
            achievement_week = week;
            break;
        }
    }
    let achievement_date = projections.last().map_or(start, |point| point.date);

    debug!(
        weekly_change,
        max_weeks,
        achievement_week,
        points = projections.len(),
        "Projected weight trajectory"
    );

    WeightProjection {
        target_achievement_date: achievement_date,
        target_achievement_week: achievement_week,
        weekly_weight_change: weekly_change,
        projections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_weeks_clamps_negative_and_nan() {
        assert_eq!(whole_weeks(-3.2), 0);
        assert_eq!(whole_weeks(f64::NAN), 0);
        assert_eq!(whole_weeks(16.1), 17);
        assert_eq!(whole_weeks(12.0), 12);
    }

    #[test]
    fn test_reached_target_respects_direction() {
        assert!(reached_target(74.9, 75.0, -0.3));
        assert!(!reached_target(75.1, 75.0, -0.3));
        assert!(reached_target(70.0, 70.0, 0.5));
        assert!(!reached_target(70.0, 70.0, 0.0));
    }
}
