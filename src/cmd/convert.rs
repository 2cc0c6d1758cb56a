use anyhow::Result;
use serde_json::json;

use bmiplan::core::units;
use bmiplan::models::measurement::{HeightUnit, WeightUnit};
use bmiplan::output;

pub fn run(quantity: &str, value: f64, from: &str, human_flag: bool) -> Result<()> {
    if !value.is_finite() {
        anyhow::bail!("value must be a finite number");
    }
    let (converted, unit) = match quantity {
        "weight" => {
            let from: WeightUnit = from.parse()?;
            let (v, to) = units::toggle_weight(value, from);
            (v, to.to_string())
        }
        "height" => {
            let from: HeightUnit = from.parse()?;
            let (v, to) = units::toggle_height(value, from);
            (v, to.to_string())
        }
        _ => anyhow::bail!("unknown quantity: {} (expected weight/height)", quantity),
    };

    if human_flag {
        println!("{} {} = {:.1} {}", value, from, converted, unit);
    } else {
        let out = output::success(
            "convert",
            json!({ "quantity": quantity, "value": converted, "unit": unit }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
