// ABOUTME: Shopping-list synthesis from a weekly meal plan
// ABOUTME: Weekly usage, unit normalization, pantry exclusion, pricing, aggregation, and grouping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Shopping List Synthesizer
//!
//! The plan comes from a language model, so every slot is optional. A
//! missing slot or a missing ingredient list contributes nothing; synthesis
//! itself never fails.

use std::collections::HashMap;

use macrofit_core::constants::DAYS_PER_WEEK;
use macrofit_core::models::{
    MealPattern, MealPlan, PatternUsage, ShoppingCategory, ShoppingItem, ShoppingList,
    WeeklySchedule,
};
use tracing::{debug, info};

use super::categorization::{categorize, IngredientCategory};
use super::normalization::normalize;
use super::pantry::is_pantry_item;
use super::pricing::{estimate_price, round_up};
use crate::config::ShoppingConfig;

const MILK: &str = "牛乳";
const MILLILITRE_UNIT: &str = "ml";
const ML_PER_LITRE: f64 = 1000.0;

/// Running total for one ingredient name
#[derive(Debug)]
struct Accumulated {
    name: String,
    amount: f64,
    unit: String,
    price: f64,
    category: IngredientCategory,
}

/// Ingredient totals keyed by exact name, in first-seen order
#[derive(Debug, Default)]
struct Ledger {
    index: HashMap<String, usize>,
    entries: Vec<Accumulated>,
}

impl Ledger {
    fn add(&mut self, name: &str, amount: f64, unit: &str, price: f64, category: IngredientCategory) {
        if let Some(&position) = self.index.get(name) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.amount += amount;
                entry.price += price;
            }
            return;
        }

        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push(Accumulated {
            name: name.to_owned(),
            amount,
            unit: unit.to_owned(),
            price,
            category,
        });
    }

    fn add_pattern(&mut self, pattern: Option<&MealPattern>, uses: u32, config: &ShoppingConfig) {
        let Some(pattern) = pattern else {
            return;
        };
        if uses == 0 {
            return;
        }

        for ingredient in pattern.ingredients() {
            if is_pantry_item(&ingredient.name) {
                continue;
            }

            let normalized = normalize(ingredient, config);
            let weekly_amount = normalized.amount * f64::from(uses);
            let price = estimate_price(
                &ingredient.name,
                weekly_amount,
                &normalized.unit,
                normalized.family,
                config,
            );
            self.add(
                &ingredient.name,
                weekly_amount,
                &normalized.unit,
                price,
                categorize(&ingredient.name),
            );
        }
    }

    fn into_list(self) -> ShoppingList {
        let mut categories: Vec<(IngredientCategory, Vec<ShoppingItem>)> = Vec::new();
        let mut total = 0.0;

        for entry in self.entries {
            total += entry.price;
            let item = ShoppingItem {
                name: entry.name,
                amount: round_up(entry.amount) as u64,
                unit: entry.unit,
                estimated_price: round_up(entry.price) as u64,
                priority: entry.category.priority(),
            };

            match categories
                .iter_mut()
                .find(|(category, _)| *category == entry.category)
            {
                Some((_, items)) => items.push(item),
                None => categories.push((entry.category, vec![item])),
            }
        }

        ShoppingList {
            total_cost: round_up(total) as u64,
            categories: categories
                .into_iter()
                .map(|(category, mut items)| {
                    items.sort_by_key(|item| item.priority.rank());
                    ShoppingCategory {
                        name: category.display_name().to_owned(),
                        items,
                    }
                })
                .collect(),
        }
    }
}

/// Weekly uses of lunch and dinner patterns A and B
///
/// Counts the plan's schedule when all seven days are present, otherwise
/// falls back to the default alternation.
fn pattern_usage(plan: &MealPlan, config: &ShoppingConfig) -> (PatternUsage, PatternUsage) {
    let default_usage = PatternUsage {
        pattern_a: config.default_pattern_a_uses,
        pattern_b: config.default_pattern_b_uses,
    };

    plan.weekly_schedule
        .as_ref()
        .and_then(WeeklySchedule::usage)
        .unwrap_or((default_usage, default_usage))
}

/// Build the weekly shopping list for a meal plan
///
/// With `protein_intake_frequency` above zero the list starts with the milk
/// needed for the daily shakes (200 ml per shake). Breakfast counts seven
/// times a week; lunch and dinner patterns count by schedule.
#[must_use]
pub fn synthesize_shopping_list(
    plan: &MealPlan,
    protein_intake_frequency: u8,
    config: &ShoppingConfig,
) -> ShoppingList {
    let mut ledger = Ledger::default();

    if protein_intake_frequency > 0 {
        let milk_ml =
            config.milk_ml_per_serving * DAYS_PER_WEEK * f64::from(protein_intake_frequency);
        let yen_per_litre = config
            .prices
            .lookup(MILK)
            .unwrap_or(config.default_yen_per_litre);
        ledger.add(
            MILK,
            milk_ml,
            MILLILITRE_UNIT,
            round_up(milk_ml * yen_per_litre / ML_PER_LITRE),
            IngredientCategory::Dairy,
        );
    }

    let (lunch_usage, dinner_usage) = pattern_usage(plan, config);
    if let Some(patterns) = plan.meal_patterns.as_ref() {
        ledger.add_pattern(
            patterns.breakfast.as_ref(),
            config.breakfast_uses_per_week,
            config,
        );
        for (pair, usage) in [
            (patterns.lunch.as_ref(), lunch_usage),
            (patterns.dinner.as_ref(), dinner_usage),
        ] {
            let Some(pair) = pair else {
                debug!("Meal pair missing from plan");
                continue;
            };
            ledger.add_pattern(pair.pattern_a.as_ref(), usage.pattern_a, config);
            ledger.add_pattern(pair.pattern_b.as_ref(), usage.pattern_b, config);
        }
    } else {
        debug!("Meal plan has no meal patterns");
    }

    let list = ledger.into_list();
    info!(
        items = list.items().count(),
        categories = list.categories.len(),
        total_cost = list.total_cost,
        "Synthesized shopping list"
    );
    list
}
