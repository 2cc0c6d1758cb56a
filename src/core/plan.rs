use thiserror::Error;

use crate::core::validate::parse_number;
use crate::models::measurement::Gender;
use crate::models::plan::{ActivityLevel, Goal, MacroIssue, NutritionPlan, PlanPolicy};

pub const PROTEIN_G_PER_KG: f64 = 1.8;
pub const FAT_SHARE: f64 = 0.25;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Error, PartialEq)]
pub enum PlanError {
    #[error("missing input data: weight, height and age are required")]
    MissingData,
    #[error("invalid input data: {0}")]
    InvalidData(&'static str),
}

impl PlanError {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::MissingData => "errorMissingDataForPlan",
            Self::InvalidData(_) => "errorInvalidPlanData",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingData => "missing_data",
            Self::InvalidData(_) => "invalid_data",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u8,
    pub gender: Option<Gender>,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub protein_kcal: f64,
    pub fat_kcal: f64,
    pub carb_kcal: f64,
    pub issue: Option<MacroIssue>,
}

/// Mifflin-St Jeor, floored at zero. Anything other than male uses the
/// female constant.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u8, gender: Option<Gender>) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    let bmr = match gender {
        Some(Gender::Male) => base + 5.0,
        _ => base - 161.0,
    };
    bmr.max(0.0)
}

pub fn tdee(bmr: f64, activity: ActivityLevel) -> f64 {
    bmr * activity.factor()
}

/// Goal-adjusted calorie target, never below zero.
///
/// The gender floor applies only when the policy enables it, and only for
/// male or female.
pub fn target_calories(tdee: f64, goal: Goal, gender: Option<Gender>, policy: &PlanPolicy) -> f64 {
    let mut calories = match goal {
        Goal::Loss => tdee - policy.loss_deficit_kcal,
        Goal::Maintenance => tdee,
        Goal::Gain => tdee + policy.gain_surplus_kcal,
    };
    if policy.calorie_floor {
        let floor = match gender {
            Some(Gender::Female) => Some(policy.floor_female_kcal),
            Some(Gender::Male) => Some(policy.floor_male_kcal),
            _ => None,
        };
        if let Some(floor) = floor {
            calories = calories.max(floor);
        }
    }
    calories.max(0.0)
}

/// Split a calorie target: protein by body weight, a fixed fat share, the
/// rest carbohydrate. A negative carbohydrate budget is reported and clamped.
pub fn macros(calories: f64, weight_kg: f64) -> MacroSplit {
    let protein_g = PROTEIN_G_PER_KG * weight_kg;
    let protein_kcal = protein_g * KCAL_PER_G_PROTEIN;
    let fat_kcal = calories * FAT_SHARE;
    let fat_g = fat_kcal / KCAL_PER_G_FAT;
    let carb_kcal = calories - protein_kcal - fat_kcal;

    if carb_kcal < 0.0 {
        tracing::debug!(calories, protein_kcal, "protein exceeds calorie budget");
        return MacroSplit {
            protein_g,
            fat_g,
            carbs_g: 0.0,
            protein_kcal,
            fat_kcal,
            carb_kcal: 0.0,
            issue: Some(MacroIssue::ProteinTooHigh),
        };
    }

    MacroSplit {
        protein_g,
        fat_g,
        carbs_g: carb_kcal / KCAL_PER_G_CARB,
        protein_kcal,
        fat_kcal,
        carb_kcal,
        issue: None,
    }
}

/// Build a full plan from validated metric inputs.
pub fn build(input: &PlanInput, policy: &PlanPolicy) -> NutritionPlan {
    let bmr = bmr(input.weight_kg, input.height_cm, input.age, input.gender);
    let tdee = tdee(bmr, input.activity);
    let calories = target_calories(tdee, input.goal, input.gender, policy);
    let split = macros(calories, input.weight_kg);
    tracing::debug!(bmr, tdee, calories, "nutrition plan built");

    NutritionPlan {
        activity: input.activity,
        goal: input.goal,
        bmr,
        tdee,
        calories,
        protein_g: split.protein_g,
        fat_g: split.fat_g,
        carbs_g: split.carbs_g,
        protein_kcal: split.protein_kcal,
        fat_kcal: split.fat_kcal,
        carb_kcal: split.carb_kcal,
        macro_issue: split.issue,
    }
}

/// Raw planner inputs. Weight and height are metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawPlanInput<'a> {
    pub weight_kg: Option<&'a str>,
    pub height_cm: Option<&'a str>,
    pub age: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub activity: Option<&'a str>,
    pub goal: Option<&'a str>,
}

/// Parse raw fields and build a plan.
///
/// Weight, height and age are prerequisites. Gender, activity and goal fall
/// back to their defaults when absent or unrecognized.
pub fn plan_from_raw(raw: &RawPlanInput, policy: &PlanPolicy) -> Result<NutritionPlan, PlanError> {
    let (Some(weight), Some(height), Some(age)) = (
        present(raw.weight_kg),
        present(raw.height_cm),
        present(raw.age),
    ) else {
        return Err(PlanError::MissingData);
    };

    let weight_kg = parse_number(weight)
        .filter(|w| *w > 0.0)
        .ok_or(PlanError::InvalidData("weight"))?;
    let height_cm = parse_number(height)
        .filter(|h| *h > 0.0)
        .ok_or(PlanError::InvalidData("height"))?;
    let age = parse_number(age)
        .filter(|a| (2.0..=120.0).contains(a))
        .map(|a| a.trunc() as u8)
        .ok_or(PlanError::InvalidData("age"))?;

    let input = PlanInput {
        weight_kg,
        height_cm,
        age,
        gender: raw.gender.and_then(Gender::parse_lenient),
        activity: raw
            .activity
            .map(ActivityLevel::parse_or_default)
            .unwrap_or_default(),
        goal: raw.goal.map(Goal::parse_or_default).unwrap_or_default(),
    };
    Ok(build(&input, policy))
}

fn present(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|s| !s.is_empty())
}
