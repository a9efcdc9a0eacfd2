// ABOUTME: Projection command for macrofit-cli
// ABOUTME: Prints the week-by-week weight trajectory and the target-achievement date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use macrofit::services::PlanningService;

use crate::helpers::display::{print_json, print_projection};
use crate::helpers::input::read_profile;

/// Project weight for a profile file, starting today unless `start` is given
pub fn run(profile_path: &Path, start: Option<NaiveDate>, json: bool) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let projection = PlanningService::offline().weight_projection(&profile, start)?;

    if json {
        print_json(&projection)
    } else {
        print_projection(&projection, profile.target_weight);
        Ok(())
    }
}
