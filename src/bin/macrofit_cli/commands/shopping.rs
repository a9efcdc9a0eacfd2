// ABOUTME: Shopping-list command for macrofit-cli
// ABOUTME: Accepts a meal-plan JSON file or a raw model response and prints the weekly list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::Path;

use anyhow::Result;
use macrofit::services::PlanningService;

use crate::helpers::display::{print_json, print_shopping_list};
use crate::helpers::input::read_text;

/// Build and print the shopping list for a meal-plan file
pub fn run(meal_plan_path: &Path, protein_frequency: u8, json: bool) -> Result<()> {
    let response = read_text(meal_plan_path)?;
    let (_, list) =
        PlanningService::offline().shopping_list_from_response(&response, protein_frequency)?;

    if json {
        print_json(&list)
    } else {
        print_shopping_list(&list);
        Ok(())
    }
}
