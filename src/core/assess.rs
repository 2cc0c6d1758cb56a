use serde::Serialize;

use crate::core::validate::{self, RawInput, ValidationError};
use crate::core::{bmi, risk, units};
use crate::models::bmi::BmiResult;
use crate::models::measurement::{Gender, Measurement, UnitPreference};
use crate::models::risk::HealthRisk;

/// Everything one form submission produces. Recomputed fresh each time.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Assessment {
    pub measurement: Measurement,
    pub bmi: BmiResult,
    pub risks: Vec<HealthRisk>,
}

/// Validate, normalize to metric, compute and classify.
pub fn assess(
    raw: &RawInput,
    gender: Option<Gender>,
    units: &UnitPreference,
) -> Result<Assessment, ValidationError> {
    let input = validate::check(raw)?;
    let measurement = Measurement {
        weight_kg: units::to_kg(input.weight, units.weight),
        height_cm: units::to_cm(input.height, units.height),
        age: input.age,
        gender,
    };
    Ok(assess_measurement(measurement))
}

/// Run the BMI engine and risk assessor on an already-metric measurement.
pub fn assess_measurement(measurement: Measurement) -> Assessment {
    let bmi = bmi::evaluate(measurement.weight_kg, measurement.height_cm, measurement.age);
    let risks = risk::assess(bmi.raw_value, measurement.age, measurement.gender);
    Assessment {
        measurement,
        bmi,
        risks,
    }
}
