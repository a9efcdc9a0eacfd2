// ABOUTME: Prompt construction for weekly meal-plan generation
// ABOUTME: Fixed planner instructions loaded at compile time plus per-user targets and JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Plan Prompts
//!
//! The fixed planning rules live in a markdown file loaded at compile time.
//! The JSON shape, the protein-shake section, and the user message are built
//! per request.

use std::fmt::Write;

use macrofit_core::models::{Gender, MealCalorieDetail, NutritionTargets, UserProfile};
use macrofit_intelligence::config::ProteinIntakeConfig;
use serde_json::{json, Map, Value};

use super::ChatMessage;

/// Planner rules shared by every request
pub const MEAL_PLANNER_SYSTEM_PROMPT: &str = include_str!("meal_planner_system.md");

/// Breakfast staple assumed when the profile names none
pub const DEFAULT_BREAKFAST_STAPLE: &str = "食パン";

const INGREDIENT_FORMAT: &str = r#"[{"name":"食材名","amount":数値,"unit":"単位","calories":数値,"protein":数値,"fat":数値,"carbs":数値}]"#;
const INSTRUCTION_FORMAT: &str = r#"["手順1","手順2","手順3"]"#;

fn pattern_template(name: &str, meal_type: &str, prep_quantity: &str) -> Value {
    json!({
        "name": name,
        "type": meal_type,
        "calories": "カロリー",
        "protein": "タンパク質(g)",
        "fat": "脂質(g)",
        "carbs": "炭水化物(g)",
        "cookingTime": "調理時間(分)",
        "batchCookable": true,
        "prepQuantity": prep_quantity,
        "ingredients": "[...]",
        "instructions": "[...]"
    })
}

fn pair_template(label: &str, meal_type: &str) -> Value {
    json!({
        "patternA": pattern_template(&format!("{label}パターンA"), meal_type, "4食分（月水金日）"),
        "patternB": pattern_template(&format!("{label}パターンB"), meal_type, "3食分（火木土）"),
    })
}

fn protein_timing(servings: u8) -> &'static str {
    match servings {
        1 => "朝食時または間食",
        2 => "朝食時・間食時",
        _ => "朝食・昼食・夕食のいずれか + 間食",
    }
}

/// Example `mealPatterns` object shown to the model
fn meal_patterns_template(meals_per_day: u8, protein: &ProteinIntakeConfig, servings: u8) -> Value {
    let mut patterns = Map::new();

    if servings > 0 {
        let count = f64::from(servings);
        patterns.insert(
            "proteinIntake".to_owned(),
            json!({
                "name": format!("プロテイン摂取 (1日{servings}回)"),
                "frequency": format!("{servings}回/日"),
                "amount": "30g/回",
                "timing": protein_timing(servings),
                "preparation": format!("プロテインパウダー30g + 牛乳{}ml", protein.milk_ml_per_serving),
                "calories": format!("{}kcal/日", count * protein.kcal_per_serving),
                "protein": format!("{}g/日", count * protein.protein_g_per_serving),
            }),
        );
    }

    patterns.insert(
        "breakfast".to_owned(),
        pattern_template("固定朝食メニュー", "breakfast", "7食分"),
    );
    match meals_per_day {
        4 => {
            patterns.insert(
                "snack".to_owned(),
                pattern_template("間食メニュー", "snack", "7食分"),
            );
        }
        5 => {
            patterns.insert(
                "morningSnack".to_owned(),
                pattern_template("午前間食メニュー", "snack", "7食分"),
            );
            patterns.insert(
                "afternoonSnack".to_owned(),
                pattern_template("午後間食メニュー", "snack", "7食分"),
            );
        }
        _ => {}
    }
    patterns.insert("lunch".to_owned(), pair_template("昼食", "lunch"));
    patterns.insert("dinner".to_owned(), pair_template("夕食", "dinner"));

    Value::Object(patterns)
}

/// Default weekly schedule: pattern A on Mon/Wed/Fri/Sun, B on Tue/Thu/Sat
fn weekly_schedule_template() -> Value {
    let day = |choice: &str| json!({ "lunch": choice, "dinner": choice });
    json!({
        "monday": day("patternA"),
        "tuesday": day("patternB"),
        "wednesday": day("patternA"),
        "thursday": day("patternB"),
        "friday": day("patternA"),
        "saturday": day("patternB"),
        "sunday": day("patternA"),
    })
}

fn system_prompt(profile: &UserProfile, protein: &ProteinIntakeConfig) -> String {
    let servings = profile.protein_intake_frequency;
    let mut prompt = String::from(MEAL_PLANNER_SYSTEM_PROMPT.trim_end());
    prompt.push_str("\n\n");

    if servings > 0 {
        let _ = writeln!(prompt, "プロテイン摂取 (1日{servings}回):");
        let _ = writeln!(prompt, "- タイミング: {}", protein_timing(servings));
        let _ = writeln!(
            prompt,
            "- 1回: 30g+牛乳{}ml={}kcal、{}g蛋白質",
            protein.milk_ml_per_serving, protein.kcal_per_serving, protein.protein_g_per_serving
        );
        prompt.push_str("- 注意: 食事栄養計算に含めない\n\n");
    }

    let structure = json!({
        "totalCost": "数値",
        "prepTime": "数値",
        "nutritionSummary": {
            "dailyCalories": "数値",
            "dailyProtein": "数値",
            "dailyFat": "数値",
            "dailyCarbs": "数値"
        },
        "mealPatterns": meal_patterns_template(profile.meals_per_day, protein, servings),
        "weeklySchedule": weekly_schedule_template(),
    });
    let structure = serde_json::to_string_pretty(&structure).unwrap_or_else(|_| structure.to_string());

    let _ = write!(
        prompt,
        "出力形式: 純粋JSON、説明不要、{{で開始}}で終了\n\n\
         材料形式:\n{INGREDIENT_FORMAT}\n\n\
         調理手順形式:\n{INSTRUCTION_FORMAT}\n\n\
         出力JSON構造:\n{structure}"
    );
    prompt
}

fn list_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_owned()
    } else {
        items.join(", ")
    }
}

fn user_prompt(
    profile: &UserProfile,
    targets: &NutritionTargets,
    meal_details: &[MealCalorieDetail],
    protein: &ProteinIntakeConfig,
) -> String {
    let servings = profile.protein_intake_frequency;
    let gender = match profile.gender {
        Gender::Male => "男性",
        Gender::Female => "女性",
    };
    let staple = profile
        .breakfast_staple
        .as_deref()
        .filter(|staple| !staple.trim().is_empty())
        .unwrap_or(DEFAULT_BREAKFAST_STAPLE);
    let meal_targets = meal_details
        .iter()
        .map(|detail| {
            format!(
                "{}: {}kcal ({}%)",
                detail.name, detail.calories, detail.percentage
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "プロフィール:\n\
         身長{height}cm、体重{weight}→{target}kg、{gender}、運動週{exercise}回\n\
         朝食主食: {staple}、プロテイン1日{servings}回\n\n\
         栄養目標 (食事分、プロテイン{shake_kcal}kcal・{shake_protein}g別途):\n\
         カロリー{calories}kcal、蛋白質{protein_g}g、脂質{fat}g、炭水化物{carbs}g\n\n\
         食事別目標 (厳守):\n{meal_targets}\n\n\
         タンパク質源: {sources}\n\
         アレルギー除外: {allergies}\n\n\
         純粋JSONで回答、{{開始}}終了",
        height = profile.height,
        weight = profile.weight,
        target = profile.target_weight,
        exercise = profile.exercise_frequency,
        shake_kcal = f64::from(servings) * protein.kcal_per_serving,
        shake_protein = f64::from(servings) * protein.protein_g_per_serving,
        calories = targets.daily_calories,
        protein_g = targets.daily_protein,
        fat = targets.daily_fat,
        carbs = targets.daily_carbs,
        sources = list_or(&profile.protein_sources, "指定なし"),
        allergies = list_or(&profile.allergies, "なし"),
    )
}

/// System and user messages asking for a weekly meal plan
///
/// `targets` and `meal_details` should already exclude protein shakes; the
/// prompt tells the model the shakes are accounted for separately.
#[must_use]
pub fn meal_plan_messages(
    profile: &UserProfile,
    targets: &NutritionTargets,
    meal_details: &[MealCalorieDetail],
    protein: &ProteinIntakeConfig,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(profile, protein)),
        ChatMessage::user(user_prompt(profile, targets, meal_details, protein)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_alternates_a_and_b() {
        let schedule = weekly_schedule_template();
        assert_eq!(schedule["monday"]["lunch"], "patternA");
        assert_eq!(schedule["tuesday"]["dinner"], "patternB");
        assert_eq!(schedule["sunday"]["dinner"], "patternA");
    }

    #[test]
    fn test_snack_slots_follow_meal_count() {
        let protein = ProteinIntakeConfig::default();
        let three = meal_patterns_template(3, &protein, 0);
        assert!(three.get("snack").is_none());
        assert!(three.get("proteinIntake").is_none());

        let four = meal_patterns_template(4, &protein, 2);
        assert!(four.get("snack").is_some());
        assert_eq!(four["proteinIntake"]["calories"], "240kcal/日");

        let five = meal_patterns_template(5, &protein, 0);
        assert!(five.get("morningSnack").is_some());
        assert!(five.get("afternoonSnack").is_some());
    }
}
