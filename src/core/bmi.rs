use crate::core::units::round1;
use crate::i18n::Translate;
use crate::models::bmi::{BmiCategory, BmiResult, THRESHOLDS};

/// Below this age the category message carries the pediatric advisory.
pub const ADULT_AGE: u8 = 18;

/// BMI = weight(kg) / height(m)^2. Callers guarantee both inputs are positive.
pub fn compute(weight_kg: f64, height_cm: f64) -> f64 {
    let h_m = height_cm / 100.0;
    weight_kg / (h_m * h_m)
}

/// Classify an unrounded BMI. Bounds are exclusive, so 25.0 is Overweight.
pub fn classify(bmi: f64) -> BmiCategory {
    THRESHOLDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, category)| *category)
        .unwrap_or(BmiCategory::ObeseClass3)
}

/// Compute, round and classify. The adult bands apply at every age.
pub fn evaluate(weight_kg: f64, height_cm: f64, age: Option<u8>) -> BmiResult {
    let raw_value = compute(weight_kg, height_cm);
    let category = classify(raw_value);
    tracing::debug!(raw_value, ?category, "bmi classified");
    BmiResult {
        value: round1(raw_value),
        raw_value,
        category,
        color: category.color().to_string(),
        range: category.range_label().to_string(),
        child_advisory: age.is_some_and(|a| a < ADULT_AGE),
    }
}

/// Localized category message, with the pediatric advisory when flagged.
pub fn category_message(category: BmiCategory, child_advisory: bool, tr: &dyn Translate) -> String {
    let name = tr.translate(category.tag());
    if child_advisory {
        format!("{} ({})", name, tr.translate("childBMIConsult"))
    } else {
        name
    }
}

impl BmiResult {
    pub fn message(&self, tr: &dyn Translate) -> String {
        category_message(self.category, self.child_advisory, tr)
    }
}
