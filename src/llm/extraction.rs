// ABOUTME: Extraction of the meal-plan JSON document from a free-text model response
// ABOUTME: Prefers a fenced json block, falls back to the outermost brace span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::LazyLock;

use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::MealPlan;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

/// Message shown to the user when the response cannot be used
pub const RETRY_MESSAGE: &str = "Failed to read the meal plan from the AI response. \
     The response was incomplete or malformed; please try again.";

/// Characters of a bad response kept in logs
const LOG_PREVIEW_CHARS: usize = 200;

/// Fenced ```json block; stored as Option so a bad pattern degrades to brace matching
static JSON_FENCE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"```json\s*([\s\S]*?)\s*```").ok());

/// Span from the first `{` to the last `}`
fn object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        text.get(start..=end)
    } else {
        None
    }
}

/// Locate the JSON object inside a model response
///
/// A fenced ```` ```json ```` block wins when present; otherwise the span
/// from the first `{` to the last `}` of the whole response is used.
#[must_use]
pub fn extract_json_block(response: &str) -> Option<&str> {
    let fenced = JSON_FENCE
        .as_ref()
        .and_then(|fence| fence.captures(response))
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str());

    object_span(fenced.unwrap_or(response))
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

/// Parse a `MealPlan` out of a model response
///
/// Individual slots are parsed leniently, so a plan with malformed meals
/// still succeeds with those meals absent.
///
/// # Errors
///
/// Returns an `InvalidFormat` error carrying a retry message when the
/// response holds no JSON object or the object does not parse
pub fn extract_meal_plan(response: &str) -> AppResult<MealPlan> {
    let Some(block) = extract_json_block(response) else {
        warn!(response = %preview(response), "No JSON object in model response");
        return Err(AppError::invalid_format(RETRY_MESSAGE));
    };

    let value: Value = serde_json::from_str(block).map_err(|e| {
        warn!(error = %e, json_len = block.len(), "Model response is not valid JSON");
        AppError::invalid_format(RETRY_MESSAGE).with_source(e)
    })?;

    if !value.is_object() {
        warn!("Model response JSON is not an object");
        return Err(AppError::invalid_format(RETRY_MESSAGE));
    }

    let plan: MealPlan = serde_json::from_value(value).map_err(|e| {
        warn!(error = %e, "Model response does not match the meal plan shape");
        AppError::invalid_format(RETRY_MESSAGE).with_source(e)
    })?;

    debug!(
        has_patterns = plan.meal_patterns.is_some(),
        has_schedule = plan.weekly_schedule.is_some(),
        "Extracted meal plan"
    );
    Ok(plan)
}
