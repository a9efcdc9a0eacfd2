// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Serialized because they mutate process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp, missing_docs)]

mod common;

use std::env;
use std::fs;

use common::{init_test_logging, SAMPLE_MEAL_PLAN};
use macrofit::config::environment::{
    LLM_API_KEY_ENV, LLM_BASE_URL_ENV, LLM_MAX_TOKENS_ENV, LLM_MODEL_ENV, LLM_TEMPERATURE_ENV,
    LLM_TIMEOUT_ENV,
};
use macrofit::config::{AppConfig, LlmConfig};
use macrofit::logging::{LogFormat, LoggingConfig};
use macrofit_core::models::{MealPlan, UserProfile};
use serial_test::serial;
use tempfile::TempDir;

const LLM_VARS: [&str; 6] = [
    LLM_BASE_URL_ENV,
    LLM_API_KEY_ENV,
    LLM_MODEL_ENV,
    LLM_TEMPERATURE_ENV,
    LLM_MAX_TOKENS_ENV,
    LLM_TIMEOUT_ENV,
];

fn clear_llm_env() {
    for var in LLM_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// LLM Configuration
// ============================================================================

#[test]
#[serial]
fn test_defaults_without_environment() {
    init_test_logging();
    clear_llm_env();

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.llm, LlmConfig::default());
    assert_eq!(config.llm.model, "gpt-4o-mini");
    assert_eq!(config.llm.max_tokens, 3000);
    assert!(config.llm.api_key.is_none());
    assert!(config.summary().contains("llm_api_key=unset"));
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_llm_env();
    env::set_var(LLM_BASE_URL_ENV, "http://localhost:11434/v1");
    env::set_var(LLM_MODEL_ENV, "qwen2.5:14b");
    env::set_var(LLM_API_KEY_ENV, "sk-test-secret");
    env::set_var(LLM_TEMPERATURE_ENV, "0.4");
    env::set_var(LLM_MAX_TOKENS_ENV, "4096");

    let config = AppConfig::from_env().unwrap();
    assert_eq!(config.llm.base_url, "http://localhost:11434/v1");
    assert_eq!(config.llm.model, "qwen2.5:14b");
    assert_eq!(config.llm.temperature, 0.4);
    assert_eq!(config.llm.max_tokens, 4096);

    let summary = config.summary();
    assert!(summary.contains("llm_api_key=set"));
    assert!(!summary.contains("sk-test-secret"));

    clear_llm_env();
}

#[test]
#[serial]
fn test_blank_api_key_is_unset() {
    clear_llm_env();
    env::set_var(LLM_API_KEY_ENV, "   ");
    let config = LlmConfig::from_env().unwrap();
    assert!(config.api_key.is_none());
    clear_llm_env();
}

#[test]
#[serial]
fn test_unparseable_number_is_error() {
    clear_llm_env();
    env::set_var(LLM_MAX_TOKENS_ENV, "lots");
    assert!(AppConfig::from_env().is_err());
    clear_llm_env();
}

#[test]
#[serial]
fn test_out_of_range_values_fail_validation() {
    clear_llm_env();
    env::set_var(LLM_TEMPERATURE_ENV, "3.5");
    assert!(AppConfig::from_env().is_err());

    clear_llm_env();
    env::set_var(LLM_BASE_URL_ENV, "localhost:8080");
    assert!(AppConfig::from_env().is_err());

    clear_llm_env();
    env::set_var(LLM_TIMEOUT_ENV, "0");
    assert!(AppConfig::from_env().is_err());
    clear_llm_env();
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[test]
#[serial]
fn test_logging_from_environment() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "debug");
    assert!(config.include_location);
    assert!(config.include_spans);

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("RUST_LOG");

    let config = LoggingConfig::from_env().with_level("warn");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.level, "warn");
}

// ============================================================================
// Input Files
// ============================================================================

#[test]
fn test_profile_file_in_form_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("profile.json");
    fs::write(
        &path,
        r#"{
          "height": 170, "weight": 80, "age": 30, "gender": "male",
          "exerciseFrequency": 3, "targetWeight": 75,
          "goalSettingMethod": "duration", "targetDurationWeeks": 12,
          "pfcBalance": {"protein": 30, "fat": 25, "carbs": 45},
          "proteinIntakeFrequency": 1
        }"#,
    )
    .unwrap();

    let profile: UserProfile = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(profile.meals_per_day, 3);
    assert_eq!(profile.macro_split.unwrap().total(), 100.0);
    assert!(profile.validate_inputs().is_ok());
}

#[test]
fn test_meal_plan_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, SAMPLE_MEAL_PLAN).unwrap();

    let plan: MealPlan = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rewritten = serde_json::to_string(&plan).unwrap();
    let reread: MealPlan = serde_json::from_str(&rewritten).unwrap();
    assert_eq!(plan, reread);
}
