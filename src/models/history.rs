use serde::{Deserialize, Serialize};

use super::bmi::BmiCategory;

/// One recorded BMI computation. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub date: String,
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub category: BmiCategory,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub child_advisory: bool,
}
