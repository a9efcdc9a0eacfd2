// ABOUTME: Output formatting helpers for macrofit-cli
// ABOUTME: Text reports for targets, projections, meal plans, and shopping lists, plus JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use macrofit::services::NutritionReport;
use macrofit_core::models::{
    MealPattern, MealPlan, PatternPair, ShoppingList, ShoppingPriority, WeightProjection,
};
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display energy, targets, meal breakdown, and goal findings
pub fn print_report(report: &NutritionReport) {
    let energy = &report.energy;
    println!("\nEnergy");
    println!("{}", "=".repeat(50));
    println!("   BMR: {:.1} kcal", energy.bmr);
    println!(
        "   Activity: {:?} (x{})",
        energy.activity_level, energy.activity_multiplier
    );
    println!("   TDEE: {} kcal", energy.tdee);

    let targets = &report.targets;
    println!("\nDaily targets");
    println!("{}", "=".repeat(50));
    println!("   Calories: {} kcal", targets.daily_calories);
    println!("   Protein:  {} g", targets.daily_protein);
    println!("   Fat:      {} g", targets.daily_fat);
    println!("   Carbs:    {} g", targets.daily_carbs);

    if report.meal_targets != report.targets {
        let meals = &report.meal_targets;
        println!(
            "   From meals (after protein shakes): {} kcal, {} g protein",
            meals.daily_calories, meals.daily_protein
        );
    }

    println!("\nMeals");
    println!("{}", "=".repeat(50));
    for meal in &report.meals {
        println!(
            "   {:<8} {:>6} kcal  {:>3}%",
            meal.name, meal.calories, meal.percentage
        );
    }

    if !report.validation.is_valid() {
        println!("\nWARNING Goal findings:");
        for message in report.validation.errors() {
            println!("• {message}");
        }
    }
}

/// Display the projected weight trajectory
pub fn print_projection(projection: &WeightProjection, target_weight: f64) {
    println!("\nWeight projection (target {target_weight} kg)");
    println!("{}", "=".repeat(50));
    println!(
        "   Weekly change: {:+.2} kg",
        projection.weekly_weight_change
    );
    for point in &projection.projections {
        println!(
            "   Week {:>3}  {}  {:.1} kg",
            point.week_number, point.date, point.projected_weight
        );
    }
    println!(
        "\nTarget reached in week {} ({})",
        projection.target_achievement_week, projection.target_achievement_date
    );
}

fn print_pattern(label: &str, pattern: Option<&MealPattern>) {
    let Some(pattern) = pattern else {
        return;
    };
    println!(
        "   {label}: {} ({} kcal)",
        pattern.name.as_deref().unwrap_or("-"),
        pattern.calories.unwrap_or_default()
    );
    for ingredient in pattern.ingredients() {
        println!(
            "      - {} {}{}",
            ingredient.name, ingredient.amount, ingredient.unit
        );
    }
}

fn print_pair(label: &str, pair: Option<&PatternPair>) {
    if let Some(pair) = pair {
        print_pattern(&format!("{label} A"), pair.pattern_a.as_ref());
        print_pattern(&format!("{label} B"), pair.pattern_b.as_ref());
    }
}

/// Display the meal patterns of a plan
pub fn print_meal_plan(plan: &MealPlan) {
    println!("\nMeal plan");
    println!("{}", "=".repeat(50));
    let Some(patterns) = plan.meal_patterns.as_ref() else {
        println!("   (no meal patterns)");
        return;
    };
    print_pattern("Breakfast", patterns.breakfast.as_ref());
    print_pattern("Snack", patterns.snack.as_ref());
    print_pattern("Morning snack", patterns.morning_snack.as_ref());
    print_pair("Lunch", patterns.lunch.as_ref());
    print_pattern("Afternoon snack", patterns.afternoon_snack.as_ref());
    print_pair("Dinner", patterns.dinner.as_ref());
}

const fn priority_marker(priority: ShoppingPriority) -> &'static str {
    match priority {
        ShoppingPriority::High => "!",
        ShoppingPriority::Medium => "+",
        ShoppingPriority::Low => " ",
    }
}

/// Display a shopping list grouped by category
pub fn print_shopping_list(list: &ShoppingList) {
    println!("\nShopping list");
    println!("{}", "=".repeat(50));
    for category in &list.categories {
        println!("{}", category.name);
        for item in &category.items {
            println!(
                "  {} {:<16} {:>6} {:<6} ¥{}",
                priority_marker(item.priority),
                item.name,
                item.amount,
                item.unit,
                item.estimated_price
            );
        }
    }
    println!("{}", "-".repeat(50));
    println!("Total: ¥{}", list.total_cost);
}
