// ABOUTME: Planning pipeline: targets, protein adjustment, meal split, LLM meal plan, shopping list
// ABOUTME: Holds injected configuration and an optional shared LLM provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Planning service.
//!
//! Everything except `generate_meal_plan` is synchronous arithmetic and works
//! without a provider. `generate_meal_plan` makes exactly one completion call.

use std::sync::Arc;

use chrono::NaiveDate;
use macrofit_core::errors::{AppError, AppResult};
use macrofit_core::models::{
    MealCalorieDetail, MealPlan, NutritionTargets, ShoppingList, UserProfile, WeightProjection,
};
use macrofit_intelligence::config::{NutritionConfig, ShoppingConfig};
use macrofit_intelligence::energy::{estimate_energy, EnergyEstimate};
use macrofit_intelligence::goal_solver::{validate_goal, GoalValidation};
use macrofit_intelligence::macro_allocator::{
    adjust_for_protein_intake, calculate_macro_targets, meal_calorie_details,
};
use macrofit_intelligence::shopping::synthesize_shopping_list;
use macrofit_intelligence::weight_projection::project_weight;
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::config::{AppConfig, LlmConfig};
use crate::llm::{extract_meal_plan, meal_plan_messages, ChatRequest, LlmProvider, OpenAiCompatibleProvider};

/// Targets and checks for one profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReport {
    /// BMR, activity level, TDEE
    pub energy: EnergyEstimate,
    /// Daily and weekly targets including protein shakes
    pub targets: NutritionTargets,
    /// Targets left for meals after protein shakes
    pub meal_targets: NutritionTargets,
    /// Per-meal calories of `meal_targets`
    pub meals: Vec<MealCalorieDetail>,
    /// Goal plausibility findings
    pub validation: GoalValidation,
}

/// Meal plan returned by the model and the shopping list derived from it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMealPlan {
    /// Targets the plan was requested for
    pub report: NutritionReport,
    /// Parsed meal plan
    pub meal_plan: MealPlan,
    /// Weekly shopping list
    pub shopping_list: ShoppingList,
}

/// Generation settings sent with each completion request
#[derive(Debug, Clone, Copy)]
struct Sampling {
    temperature: f32,
    max_tokens: u32,
}

impl From<&LlmConfig> for Sampling {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }
}

/// Planning pipeline with injected configuration
pub struct PlanningService {
    nutrition: NutritionConfig,
    shopping: ShoppingConfig,
    provider: Option<Arc<dyn LlmProvider>>,
    sampling: Sampling,
}

impl PlanningService {
    /// Service with explicit configuration and provider
    #[must_use]
    pub fn new(
        nutrition: NutritionConfig,
        shopping: ShoppingConfig,
        provider: Arc<dyn LlmProvider>,
        llm: &LlmConfig,
    ) -> Self {
        Self {
            nutrition,
            shopping,
            provider: Some(provider),
            sampling: Sampling::from(llm),
        }
    }

    /// Service with default configuration and no provider
    ///
    /// Calculations work; `generate_meal_plan` fails with a config error.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            nutrition: NutritionConfig::default(),
            shopping: ShoppingConfig::default(),
            provider: None,
            sampling: Sampling::from(&LlmConfig::default()),
        }
    }

    /// Service backed by an `OpenAI`-compatible provider built from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let provider = OpenAiCompatibleProvider::new(config.llm.clone())?;
        Ok(Self::new(
            config.nutrition.clone(),
            config.shopping.clone(),
            Arc::new(provider),
            &config.llm,
        ))
    }

    /// Nutrition configuration in use
    #[must_use]
    pub const fn nutrition_config(&self) -> &NutritionConfig {
        &self.nutrition
    }

    /// Energy, targets, per-meal split, and goal findings
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error when the profile fails input checks
    pub fn nutrition_report(&self, profile: &UserProfile) -> AppResult<NutritionReport> {
        profile.validate_inputs()?;

        let energy = estimate_energy(profile, &self.nutrition);
        let targets = calculate_macro_targets(profile, &self.nutrition);
        let meal_targets =
            adjust_for_protein_intake(&targets, profile.protein_intake_frequency, &self.nutrition);
        let meals =
            meal_calorie_details(meal_targets.daily_calories, profile.meals_per_day, &self.nutrition)?;
        let validation = validate_goal(profile, &self.nutrition);

        if !validation.is_valid() {
            warn!(findings = ?validation.errors(), "Goal has plausibility findings");
        }

        Ok(NutritionReport {
            energy,
            targets,
            meal_targets,
            meals,
            validation,
        })
    }

    /// Week-by-week weight projection starting at `start`
    ///
    /// # Errors
    ///
    /// Returns a `ValueOutOfRange` error when the profile fails input checks
    pub fn weight_projection(
        &self,
        profile: &UserProfile,
        start: NaiveDate,
    ) -> AppResult<WeightProjection> {
        profile.validate_inputs()?;
        Ok(project_weight(profile, &self.nutrition, start))
    }

    /// Shopping list for an already parsed meal plan
    #[must_use]
    pub fn shopping_list(&self, plan: &MealPlan, protein_intake_frequency: u8) -> ShoppingList {
        synthesize_shopping_list(plan, protein_intake_frequency, &self.shopping)
    }

    /// Shopping list for a raw model response
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error when no meal plan can be extracted
    pub fn shopping_list_from_response(
        &self,
        response: &str,
        protein_intake_frequency: u8,
    ) -> AppResult<(MealPlan, ShoppingList)> {
        let plan = extract_meal_plan(response)?;
        let list = self.shopping_list(&plan, protein_intake_frequency);
        Ok((plan, list))
    }

    /// Ask the provider for a weekly meal plan and derive the shopping list
    ///
    /// # Errors
    ///
    /// Returns an error when no provider is configured, the profile fails
    /// input checks, the completion call fails, or the response holds no
    /// usable meal plan
    #[instrument(skip_all, fields(meals_per_day = profile.meals_per_day))]
    pub async fn generate_meal_plan(&self, profile: &UserProfile) -> AppResult<GeneratedMealPlan> {
        let provider = self
            .provider
            .as_ref()
            .ok_or_else(|| AppError::config_missing("LLM provider"))?;

        let report = self.nutrition_report(profile)?;
        let messages = meal_plan_messages(
            profile,
            &report.meal_targets,
            &report.meals,
            &self.nutrition.protein_intake,
        );
        let request = ChatRequest::new(messages)
            .with_temperature(self.sampling.temperature)
            .with_max_tokens(self.sampling.max_tokens);

        info!(
            provider = provider.name(),
            model = provider.default_model(),
            daily_calories = report.meal_targets.daily_calories,
            "Requesting meal plan"
        );
        let response = provider.complete(&request).await?;
        if let Some(usage) = response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "Meal plan completion received"
            );
        }

        let meal_plan = extract_meal_plan(&response.content)?;
        let shopping_list = self.shopping_list(&meal_plan, profile.protein_intake_frequency);

        Ok(GeneratedMealPlan {
            report,
            meal_plan,
            shopping_list,
        })
    }
}
