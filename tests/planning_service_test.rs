// ABOUTME: Integration tests for the planning service pipeline
// ABOUTME: Uses a stub LLM provider to cover prompts, extraction, and shopping-list synthesis end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::float_cmp, missing_docs)]

mod common;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use common::{duration_profile, fenced_response, init_test_logging, reference_profile};
use macrofit::config::LlmConfig;
use macrofit::llm::{ChatRequest, ChatResponse, LlmProvider, MessageRole};
use macrofit::services::PlanningService;
use macrofit::{AppError, AppResult, ErrorCode};
use macrofit_core::models::UserProfile;
use macrofit_intelligence::config::{NutritionConfig, ShoppingConfig};

/// Provider that returns a canned reply and records each request
struct StubProvider {
    reply: AppResult<String>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubProvider {
    fn replying(content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(content.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(error: AppError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &ChatRequest) -> AppResult<ChatResponse> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Ok(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "stub-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Err(error) => Err(AppError::new(error.code, error.message.clone())),
        }
    }
}

fn service_with(provider: Arc<StubProvider>) -> PlanningService {
    PlanningService::new(
        NutritionConfig::default(),
        ShoppingConfig::default(),
        provider,
        &LlmConfig::default(),
    )
}

// ============================================================================
// Offline Calculations
// ============================================================================

#[test]
fn test_nutrition_report_reference_profile() {
    init_test_logging();
    let report = PlanningService::offline()
        .nutrition_report(&duration_profile(12))
        .unwrap();

    assert!((report.energy.bmr - 1717.5).abs() < 1e-9);
    assert_eq!(report.energy.tdee, 2662.0);
    assert_eq!(report.targets.daily_calories, 2204.0);
    assert_eq!(report.meal_targets, report.targets);
    assert_eq!(report.meals.len(), 3);
    assert_eq!(
        report.meals.iter().map(|meal| meal.calories).sum::<f64>(),
        2204.0
    );
    assert!(report.validation.is_valid());
}

#[test]
fn test_report_subtracts_protein_shakes_before_meal_split() {
    let profile = UserProfile {
        protein_intake_frequency: 1,
        meals_per_day: 4,
        ..duration_profile(12)
    };
    let report = PlanningService::offline().nutrition_report(&profile).unwrap();

    assert_eq!(report.targets.daily_calories, 2204.0);
    assert_eq!(report.meal_targets.daily_calories, 2084.0);
    assert_eq!(report.meal_targets.daily_protein, 165.0 - 24.0);
    assert_eq!(report.meals.len(), 4);
    assert_eq!(
        report.meals.iter().map(|meal| meal.calories).sum::<f64>(),
        2084.0
    );
}

#[test]
fn test_report_rejects_invalid_inputs() {
    let service = PlanningService::offline();
    for profile in [
        UserProfile {
            weight: 0.0,
            ..reference_profile()
        },
        UserProfile {
            height: f64::NAN,
            ..reference_profile()
        },
        UserProfile {
            meals_per_day: 0,
            ..reference_profile()
        },
        UserProfile {
            exercise_frequency: 30,
            ..reference_profile()
        },
    ] {
        let error = service.nutrition_report(&profile).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_report_serializes_for_callers() {
    let report = PlanningService::offline()
        .nutrition_report(&reference_profile())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["targets"]["dailyCalories"], 2332.0);
    assert_eq!(json["mealTargets"]["dailyCalories"], 2332.0);
    assert_eq!(json["meals"][0]["name"], "朝食");
    assert_eq!(json["validation"]["isValid"], true);
}

#[test]
fn test_weight_projection_via_service() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let projection = PlanningService::offline()
        .weight_projection(&duration_profile(12), start)
        .unwrap();
    assert_eq!(projection.target_achievement_week, 12);
    assert_eq!(projection.projections[0].projected_weight, 80.0);
}

#[test]
fn test_weight_projection_rejects_endless_duration() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let error = PlanningService::offline()
        .weight_projection(&duration_profile(20_000_000), start)
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(
        error.context.resource.as_deref(),
        Some("targetDurationWeeks")
    );
}

#[test]
fn test_shopping_list_from_raw_response() {
    let (plan, list) = PlanningService::offline()
        .shopping_list_from_response(&fenced_response(), 2)
        .unwrap();
    assert!(plan.meal_patterns.is_some());
    assert_eq!(list.total_cost, 4538);
}

// ============================================================================
// Meal Plan Generation
// ============================================================================

#[tokio::test]
async fn test_generate_without_provider_is_config_error() {
    let error = PlanningService::offline()
        .generate_meal_plan(&reference_profile())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigMissing);
}

#[tokio::test]
async fn test_generate_meal_plan_end_to_end() {
    init_test_logging();
    let provider = StubProvider::replying(fenced_response());
    let service = service_with(Arc::clone(&provider));
    let profile = UserProfile {
        protein_intake_frequency: 2,
        ..duration_profile(12)
    };

    let generated = service.generate_meal_plan(&profile).await.unwrap();
    assert_eq!(generated.report.meal_targets.daily_calories, 2204.0 - 240.0);
    assert_eq!(generated.shopping_list.total_cost, 4538);
    assert!(generated.meal_plan.meal_patterns.is_some());

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, MessageRole::System);
    assert_eq!(request.messages[1].role, MessageRole::User);
    assert_eq!(request.max_tokens, Some(3000));
    assert!(request.messages[1].content.contains("1964kcal"));
}

#[tokio::test]
async fn test_generate_surfaces_provider_errors() {
    let provider = StubProvider::failing(AppError::new(
        ErrorCode::ExternalServiceUnavailable,
        "rate limited",
    ));
    let service = service_with(provider);

    let error = service
        .generate_meal_plan(&reference_profile())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_generate_rejects_unusable_reply() {
    let provider = StubProvider::replying("今は献立を作成できません。");
    let service = service_with(Arc::clone(&provider));

    let error = service
        .generate_meal_plan(&reference_profile())
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    // One call only; retrying is left to the user
    assert_eq!(provider.requests().len(), 1);
}
