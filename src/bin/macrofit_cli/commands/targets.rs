// ABOUTME: Targets command for macrofit-cli
// ABOUTME: Prints energy expenditure, macro targets, meal breakdown, and goal findings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use macrofit::services::PlanningService;

use crate::helpers::display::{print_json, print_report};
use crate::helpers::input::read_profile;

/// Compute and print the nutrition report for a profile file
pub fn run(profile_path: &Path, json: bool) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let report = PlanningService::offline().nutrition_report(&profile)?;

    if json {
        print_json(&report)
    } else {
        print_report(&report);
        Ok(())
    }
}
