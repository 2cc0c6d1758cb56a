use anyhow::Result;
use std::io::{self, Write};

use bmiplan::db::Database;
use bmiplan::models::config::Config;

const MAX_ATTEMPTS: usize = 10;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if !skip {
        println!("bmiplan - Initial Setup\n");

        let weight_unit = prompt_string("Weight unit (kg/lb)")?;
        if !weight_unit.is_empty() {
            config.set("units.weight", &weight_unit)?;
        }
        let height_unit = prompt_string("Height unit (cm/in)")?;
        if !height_unit.is_empty() {
            config.set("units.height", &height_unit)?;
        }

        let height = prompt_f64("Height (cm)")?;
        config.set("height", &height.to_string())?;
        let age = prompt_u8("Age")?;
        config.set("age", &age.to_string())?;
        let gender = prompt_string("Gender (male/female/other, or empty)")?;
        if !gender.is_empty() {
            config.set("gender", &gender)?;
        }

        config.save()?;
        Database::open(&Config::db_path())?;
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    } else {
        config.save()?;
        Database::open(&Config::db_path())?;
        println!("Config initialized with defaults at {:?}", Config::path());
    }

    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("unexpected end of input during setup");
    }
    Ok(buf.trim().to_string())
}

fn prompt_f64(label: &str) -> Result<f64> {
    for _ in 0..MAX_ATTEMPTS {
        let s = prompt_string(label)?;
        match s.parse::<f64>() {
            Ok(v) if v > 0.0 && v.is_finite() => return Ok(v),
            _ => println!("Please enter a positive number."),
        }
    }
    anyhow::bail!("Maximum retry limit exceeded for {}", label)
}

fn prompt_u8(label: &str) -> Result<u8> {
    for _ in 0..MAX_ATTEMPTS {
        let s = prompt_string(label)?;
        match s.parse::<u8>() {
            Ok(v) if (2..=120).contains(&v) => return Ok(v),
            _ => println!("Please enter a whole number between 2 and 120."),
        }
    }
    anyhow::bail!("Maximum retry limit exceeded for {}", label)
}
