use crate::models::measurement::{HeightUnit, WeightUnit};

pub const KG_TO_LB: f64 = 2.20462;
pub const IN_TO_CM: f64 = 2.54;

/// Convert a weight in `unit` to kilograms.
pub fn to_kg(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value,
        WeightUnit::Lb => value / KG_TO_LB,
    }
}

/// Convert kilograms to `unit`.
pub fn from_kg(value_kg: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => value_kg,
        WeightUnit::Lb => value_kg * KG_TO_LB,
    }
}

/// Convert a height in `unit` to centimeters.
pub fn to_cm(value: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value,
        HeightUnit::In => value * IN_TO_CM,
    }
}

/// Convert centimeters to `unit`.
pub fn from_cm(value_cm: f64, unit: HeightUnit) -> f64 {
    match unit {
        HeightUnit::Cm => value_cm,
        HeightUnit::In => value_cm / IN_TO_CM,
    }
}

/// Re-express a displayed weight in the other unit, quantized to one decimal.
///
/// Lossy: toggling back and forth drifts by up to 0.05 per step.
pub fn toggle_weight(value: f64, from: WeightUnit) -> (f64, WeightUnit) {
    let to = from.toggled();
    (round1(from_kg(to_kg(value, from), to)), to)
}

/// Re-express a displayed height in the other unit, quantized to one decimal.
pub fn toggle_height(value: f64, from: HeightUnit) -> (f64, HeightUnit) {
    let to = from.toggled();
    (round1(from_cm(to_cm(value, from), to)), to)
}

pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
