use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Lightly,
    Moderately,
    Very,
    Extra,
}

impl ActivityLevel {
    /// TDEE multiplier.
    pub fn factor(&self) -> f64 {
        match self {
            Self::Sedentary => 1.2,
            Self::Lightly => 1.375,
            Self::Moderately => 1.55,
            Self::Very => 1.725,
            Self::Extra => 1.9,
        }
    }

    /// Unrecognized or empty input falls back to sedentary.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "sedentary"),
            Self::Lightly => write!(f, "lightly"),
            Self::Moderately => write!(f, "moderately"),
            Self::Very => write!(f, "very"),
            Self::Extra => write!(f, "extra"),
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "lightly" | "light" => Ok(Self::Lightly),
            "moderately" | "moderate" => Ok(Self::Moderately),
            "very" | "active" => Ok(Self::Very),
            "extra" => Ok(Self::Extra),
            _ => anyhow::bail!(
                "invalid activity level: {} (expected sedentary/lightly/moderately/very/extra)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Loss,
    #[default]
    Maintenance,
    Gain,
}

impl Goal {
    /// Unrecognized or empty input falls back to maintenance.
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loss => write!(f, "loss"),
            Self::Maintenance => write!(f, "maintenance"),
            Self::Gain => write!(f, "gain"),
        }
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loss" | "lose" => Ok(Self::Loss),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "gain" => Ok(Self::Gain),
            _ => anyhow::bail!("invalid goal: {} (expected loss/maintenance/gain)", s),
        }
    }
}

/// Planner constants that historically differed between app variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanPolicy {
    #[serde(default = "default_loss_deficit")]
    pub loss_deficit_kcal: f64,
    #[serde(default = "default_gain_surplus")]
    pub gain_surplus_kcal: f64,
    #[serde(default)]
    pub calorie_floor: bool,
    #[serde(default = "default_floor_female")]
    pub floor_female_kcal: f64,
    #[serde(default = "default_floor_male")]
    pub floor_male_kcal: f64,
}

fn default_loss_deficit() -> f64 {
    500.0
}
fn default_gain_surplus() -> f64 {
    300.0
}
fn default_floor_female() -> f64 {
    1200.0
}
fn default_floor_male() -> f64 {
    1500.0
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            loss_deficit_kcal: default_loss_deficit(),
            gain_surplus_kcal: default_gain_surplus(),
            calorie_floor: false,
            floor_female_kcal: default_floor_female(),
            floor_male_kcal: default_floor_male(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MacroIssue {
    /// Protein alone exceeds the calorie budget left after fat.
    ProteinTooHigh,
}

impl MacroIssue {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ProteinTooHigh => "macroErrorProteinTooHigh",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub bmr: f64,
    pub tdee: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub protein_kcal: f64,
    pub fat_kcal: f64,
    pub carb_kcal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_issue: Option<MacroIssue>,
}
