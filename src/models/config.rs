use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::i18n::Locale;
use crate::models::measurement::{Gender, UnitPreference};
use crate::models::plan::PlanPolicy;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub units: UnitPreference,
    #[serde(default)]
    pub plan: PlanPolicy,
}

/// Stored defaults used when a command omits height, age or gender.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub height_cm: Option<f64>,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // A pre-existing file keeps its old mode through open()
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` key. Values are validated before anything changes.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "height" => self.profile.height_cm = Some(parse_positive(key, value)?),
            "age" => {
                let age: u8 = value.parse()?;
                if !(2..=120).contains(&age) {
                    anyhow::bail!("age must be between 2 and 120");
                }
                self.profile.age = Some(age);
            }
            "gender" => self.profile.gender = Some(value.parse()?),
            "units.weight" => self.units.weight = value.parse()?,
            "units.height" => self.units.height = value.parse()?,
            "plan.loss_deficit" => self.plan.loss_deficit_kcal = parse_non_negative(key, value)?,
            "plan.gain_surplus" => self.plan.gain_surplus_kcal = parse_non_negative(key, value)?,
            "plan.calorie_floor" => self.plan.calorie_floor = value.parse()?,
            "plan.floor_female" => self.plan.floor_female_kcal = parse_non_negative(key, value)?,
            "plan.floor_male" => self.plan.floor_male_kcal = parse_non_negative(key, value)?,
            "locale" => self.locale = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("BMIPLAN_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bmiplan")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}

fn parse_positive(key: &str, value: &str) -> anyhow::Result<f64> {
    let v: f64 = value.parse()?;
    if !v.is_finite() || v <= 0.0 {
        anyhow::bail!("{} must be a positive number", key);
    }
    Ok(v)
}

fn parse_non_negative(key: &str, value: &str) -> anyhow::Result<f64> {
    let v: f64 = value.parse()?;
    if !v.is_finite() || v < 0.0 {
        anyhow::bail!("{} must be zero or a positive number", key);
    }
    Ok(v)
}
