pub mod assess;
pub mod bmi;
pub mod history;
pub mod plan;
pub mod risk;
pub mod session;
pub mod units;
pub mod validate;
