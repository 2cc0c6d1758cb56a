pub mod bmi;
pub mod config;
pub mod history;
pub mod measurement;
pub mod plan;
pub mod risk;

pub use bmi::{BmiCategory, BmiResult};
pub use history::HistoryEntry;
pub use measurement::{Gender, HeightUnit, Measurement, UnitPreference, WeightUnit};
pub use plan::{ActivityLevel, Goal, NutritionPlan};
pub use risk::HealthRisk;
