// ABOUTME: Meal-plan command for macrofit-cli
// ABOUTME: Calls the configured LLM and prints the plan with its shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use macrofit::config::AppConfig;
use macrofit::services::PlanningService;
use tracing::info;

use crate::helpers::display::{print_json, print_meal_plan, print_report, print_shopping_list};
use crate::helpers::input::read_profile;

/// Generate a meal plan for a profile file
pub async fn run(profile_path: &Path, json: bool) -> Result<()> {
    let profile = read_profile(profile_path)?;
    let config = AppConfig::from_env()?;
    config.log_summary();

    let service = PlanningService::from_config(&config)?;
    info!("Generating weekly meal plan");
    let generated = service.generate_meal_plan(&profile).await?;

    if json {
        return print_json(&generated);
    }

    print_report(&generated.report);
    print_meal_plan(&generated.meal_plan);
    print_shopping_list(&generated.shopping_list);
    Ok(())
}
