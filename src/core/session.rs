use crate::core::assess::{self, Assessment};
use crate::core::units::{self, round1};
use crate::core::validate::{RawInput, ValidationError, parse_number};
use crate::models::measurement::{Gender, UnitPreference};

/// Raw form state for one calculator session.
///
/// Holds what the user typed plus the active units. Derived results are
/// never stored here; [`FormSession::submit`] recomputes them every time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub units: UnitPreference,
}

impl FormSession {
    pub fn new(units: UnitPreference) -> Self {
        Self {
            units,
            ..Self::default()
        }
    }

    /// Switch kg/lb, re-quantizing a numeric weight field to one decimal.
    pub fn toggle_weight_unit(&mut self) {
        if let Some(v) = parse_number(&self.weight) {
            let (converted, _) = units::toggle_weight(v, self.units.weight);
            self.weight = format_field(converted);
        }
        self.units.weight = self.units.weight.toggled();
    }

    /// Switch cm/in, re-quantizing a numeric height field to one decimal.
    pub fn toggle_height_unit(&mut self) {
        if let Some(v) = parse_number(&self.height) {
            let (converted, _) = units::toggle_height(v, self.units.height);
            self.height = format_field(converted);
        }
        self.units.height = self.units.height.toggled();
    }

    pub fn submit(&self) -> Result<Assessment, ValidationError> {
        let raw = RawInput {
            weight: &self.weight,
            height: &self.height,
            age: &self.age,
        };
        assess::assess(&raw, self.gender, &self.units)
    }

    /// Clear every field. The unit preference is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.units);
    }
}

fn format_field(v: f64) -> String {
    format!("{:.1}", round1(v))
}
