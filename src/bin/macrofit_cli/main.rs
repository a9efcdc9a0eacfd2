// ABOUTME: MacroFit CLI - nutrition targets, weight projections, meal plans, and shopping lists
// ABOUTME: Reads profile and meal-plan JSON files and prints text or JSON reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # BMR, TDEE, macro targets, per-meal calories, and goal findings
//! macrofit-cli targets --profile profile.json
//!
//! # Week-by-week weight projection from a given start date
//! macrofit-cli project --profile profile.json --start 2025-01-06
//!
//! # Shopping list from a saved meal plan or raw model response
//! macrofit-cli shopping-list --meal-plan response.txt --protein-frequency 2
//!
//! # Generate a meal plan with the configured LLM (MACROFIT_LLM_* variables)
//! macrofit-cli plan --profile profile.json --json
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use macrofit::logging::LoggingConfig;
use macrofit::AppError;
use macrofit_core::errors::ErrorResponse;
use tracing::{debug, warn};

use crate::helpers::display::print_json;

#[derive(Parser)]
#[command(
    name = "macrofit-cli",
    about = "MacroFit nutrition planner",
    long_about = "Calculate calorie and macro targets, project weight change, and build weekly shopping lists from LLM meal plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show energy expenditure, targets, meal breakdown, and goal findings
    Targets {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Project body weight week by week
    Project {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// First day of the projection (YYYY-MM-DD, default: today)
        #[arg(long)]
        start: Option<NaiveDate>,
    },

    /// Build a shopping list from a meal plan
    ShoppingList {
        /// Meal plan JSON, or a raw model response containing it
        #[arg(long)]
        meal_plan: PathBuf,

        /// Protein shakes per day (adds milk)
        #[arg(long, default_value = "0")]
        protein_frequency: u8,
    },

    /// Generate a weekly meal plan with the configured LLM
    Plan {
        /// Profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let level = if cli.verbose { "debug" } else { "warn" };
    LoggingConfig::from_env()
        .with_level(level)
        .with_stderr()
        .init()?;

    debug!("MacroFit CLI");

    let json = cli.json;
    let outcome = match cli.command {
        Command::Targets { profile } => commands::targets::run(&profile, json),
        Command::Project { profile, start } => commands::project::run(&profile, start, json),
        Command::ShoppingList {
            meal_plan,
            protein_frequency,
        } => commands::shopping::run(&meal_plan, protein_frequency, json),
        Command::Plan { profile } => commands::plan::run(&profile, json).await,
    };

    if let Err(error) = &outcome {
        report_failure(error, json)?;
    }
    outcome
}

/// Print a machine-readable error body and hint at retries
fn report_failure(error: &Error, json: bool) -> Result<()> {
    let Some(app_error) = error.downcast_ref::<AppError>() else {
        return Ok(());
    };
    if app_error.code.is_transient() {
        warn!(code = ?app_error.code, "This failure is usually temporary; running the command again may succeed");
    }
    if json {
        print_json(&ErrorResponse::from(app_error))?;
    }
    Ok(())
}
