// ABOUTME: Weekly meal-pattern document produced by the LLM collaborator
// ABOUTME: Every field is optional and parsed leniently so malformed slots degrade to absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan records.
//!
//! The document comes from a language model and is untrusted. Deserialization
//! never fails because of a single bad slot or ingredient: a slot that is not
//! a well-formed object becomes `None`, an `ingredients` value that is not an
//! array becomes `None`, and array elements without a string `name` and a
//! finite non-negative `amount` are dropped. Numeric fields accept numbers or
//! numeric strings.

use serde::{Deserialize, Serialize};

/// One ingredient line of a meal pattern
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealIngredient {
    /// Ingredient name, used verbatim as the aggregation key
    pub name: String,
    /// Amount per serving in `unit`
    #[serde(deserialize_with = "lenient::amount")]
    pub amount: f64,
    /// Unit of `amount` (g, ml, 個, 枚, ...)
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub unit: String,
    /// Calories per serving
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Fat per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Carbohydrates per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
}

/// A recipe used for one or more meals of the week
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPattern {
    /// Dish name
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Meal type label (breakfast, lunch, dinner, snack)
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub meal_type: Option<String>,
    /// Calories per serving
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Protein per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Fat per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Carbohydrates per serving (g)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Cooking time in minutes
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<f64>,
    /// Whether the dish can be batch cooked
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub batch_cookable: Option<bool>,
    /// Free-text batch quantity ("4食分" etc.)
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub prep_quantity: Option<String>,
    /// Ingredient list; `None` when the field is absent or not an array
    #[serde(default, deserialize_with = "lenient::ingredients", skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<MealIngredient>>,
    /// Cooking steps
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub instructions: Vec<String>,
}

impl MealPattern {
    /// Ingredients of this pattern, empty when the list is missing
    #[must_use]
    pub fn ingredients(&self) -> &[MealIngredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

/// Alternating pattern A/B for a meal that repeats during the week
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatternPair {
    /// Pattern A (Mon/Wed/Fri/Sun by default)
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub pattern_a: Option<MealPattern>,
    /// Pattern B (Tue/Thu/Sat by default)
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub pattern_b: Option<MealPattern>,
}

/// Fixed protein-shake routine description
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProteinIntakePattern {
    /// Label
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Servings per day, as text
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Amount per serving, as text
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    /// When to take it
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    /// How to prepare it
    #[serde(default, deserialize_with = "lenient::text", skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// All meal slots of the week
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPatterns {
    /// Protein-shake routine
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub protein_intake: Option<ProteinIntakePattern>,
    /// Fixed breakfast, eaten every day
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<MealPattern>,
    /// Snack for the four-meal layout
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub snack: Option<MealPattern>,
    /// Morning snack for the five-meal layout
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub morning_snack: Option<MealPattern>,
    /// Afternoon snack for the five-meal layout
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub afternoon_snack: Option<MealPattern>,
    /// Lunch patterns
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub lunch: Option<PatternPair>,
    /// Dinner patterns
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub dinner: Option<PatternPair>,
}

/// Which of the two alternating patterns a day uses
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PatternChoice {
    /// Pattern A
    #[serde(rename = "patternA")]
    A,
    /// Pattern B
    #[serde(rename = "patternB")]
    B,
}

/// Pattern assignment for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaySchedule {
    /// Lunch pattern
    pub lunch: PatternChoice,
    /// Dinner pattern
    pub dinner: PatternChoice,
}

/// Pattern assignment for every day of the week
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// Monday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub monday: Option<DaySchedule>,
    /// Tuesday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub tuesday: Option<DaySchedule>,
    /// Wednesday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub wednesday: Option<DaySchedule>,
    /// Thursday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub thursday: Option<DaySchedule>,
    /// Friday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub friday: Option<DaySchedule>,
    /// Saturday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub saturday: Option<DaySchedule>,
    /// Sunday
    #[serde(default, deserialize_with = "lenient::slot")]
    pub sunday: Option<DaySchedule>,
}

/// How many days of the week use each pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternUsage {
    /// Days on pattern A
    pub pattern_a: u32,
    /// Days on pattern B
    pub pattern_b: u32,
}

impl WeeklySchedule {
    /// The seven days in order, or `None` when any day is missing or malformed
    #[must_use]
    pub fn days(&self) -> Option<[DaySchedule; 7]> {
        Some([
            self.monday?,
            self.tuesday?,
            self.wednesday?,
            self.thursday?,
            self.friday?,
            self.saturday?,
            self.sunday?,
        ])
    }

    /// Lunch and dinner usage counts for a complete schedule
    #[must_use]
    pub fn usage(&self) -> Option<(PatternUsage, PatternUsage)> {
        let days = self.days()?;
        let count = |pick: fn(&DaySchedule) -> PatternChoice| {
            let pattern_a = days
                .iter()
                .filter(|day| pick(day) == PatternChoice::A)
                .count() as u32;
            PatternUsage {
                pattern_a,
                pattern_b: days.len() as u32 - pattern_a,
            }
        };
        Some((count(|day| day.lunch), count(|day| day.dinner)))
    }
}

/// Weekly meal plan as returned by the LLM
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Meal slots
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub meal_patterns: Option<MealPatterns>,
    /// Day-by-day pattern assignment
    #[serde(default, deserialize_with = "lenient::slot", skip_serializing_if = "Option::is_none")]
    pub weekly_schedule: Option<WeeklySchedule>,
    /// Model's own cost estimate (informational)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    /// Model's own total prep time in minutes (informational)
    #[serde(default, deserialize_with = "lenient::number", skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<f64>,
}

/// Field-level deserializers that turn malformed values into `None`
mod lenient {
    use serde::de::{self, DeserializeOwned};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::MealIngredient;

    fn as_number(value: &Value) -> Option<f64> {
        match value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|number| number.is_finite())
    }

    pub fn slot<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(as_number(&Value::deserialize(deserializer)?))
    }

    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        as_number(&Value::deserialize(deserializer)?)
            .filter(|amount| *amount >= 0.0)
            .ok_or_else(|| de::Error::custom("amount must be a non-negative number"))
    }

    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
    }

    pub fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(text(deserializer)?.unwrap_or_default())
    }

    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(flag) => Some(flag),
            Value::String(text) => text.trim().parse::<bool>().ok(),
            _ => None,
        })
    }

    pub fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    pub fn ingredients<'de, D>(deserializer: D) -> Result<Option<Vec<MealIngredient>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value::<MealIngredient>(item).ok())
                    .collect(),
            ),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_slot_becomes_none() {
        let plan: MealPlan = serde_json::from_str(
            r#"{"mealPatterns":{"breakfast":"固定朝食","lunch":{"patternA":{"name":"A"},"patternB":42}}}"#,
        )
        .unwrap();
        let patterns = plan.meal_patterns.unwrap();
        assert!(patterns.breakfast.is_none());
        let lunch = patterns.lunch.unwrap();
        assert_eq!(lunch.pattern_a.unwrap().name.as_deref(), Some("A"));
        assert!(lunch.pattern_b.is_none());
    }

    #[test]
    fn test_bad_ingredients_are_dropped() {
        let pattern: MealPattern = serde_json::from_str(
            r#"{"ingredients":[
                {"name":"鶏むね肉","amount":150,"unit":"g"},
                {"name":"卵","amount":"2","unit":"個"},
                {"amount":100,"unit":"g"},
                {"name":"白米","amount":"たくさん","unit":"g"},
                {"name":"豆腐","amount":-1,"unit":"丁"},
                "ブロッコリー"
            ]}"#,
        )
        .unwrap();
        let names: Vec<&str> = pattern.ingredients().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["鶏むね肉", "卵"]);
        assert!((pattern.ingredients()[1].amount - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_array_ingredients_is_none() {
        let pattern: MealPattern =
            serde_json::from_str(r#"{"name":"x","ingredients":"[...]","calories":"カロリー"}"#)
                .unwrap();
        assert!(pattern.ingredients.is_none());
        assert!(pattern.calories.is_none());
        assert!(pattern.ingredients().is_empty());
    }

    #[test]
    fn test_schedule_usage_counts() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"{"monday":{"lunch":"patternA","dinner":"patternA"},
                "tuesday":{"lunch":"patternB","dinner":"patternB"},
                "wednesday":{"lunch":"patternA","dinner":"patternB"},
                "thursday":{"lunch":"patternB","dinner":"patternB"},
                "friday":{"lunch":"patternA","dinner":"patternA"},
                "saturday":{"lunch":"patternB","dinner":"patternB"},
                "sunday":{"lunch":"patternA","dinner":"patternA"}}"#,
        )
        .unwrap();
        let (lunch, dinner) = schedule.usage().unwrap();
        assert_eq!((lunch.pattern_a, lunch.pattern_b), (4, 3));
        assert_eq!((dinner.pattern_a, dinner.pattern_b), (3, 4));
    }

    #[test]
    fn test_incomplete_schedule_has_no_usage() {
        let schedule: WeeklySchedule = serde_json::from_str(
            r#"{"monday":{"lunch":"patternA","dinner":"patternA"},"tuesday":{"lunch":"patternC"}}"#,
        )
        .unwrap();
        assert!(schedule.tuesday.is_none());
        assert!(schedule.usage().is_none());
    }
}
