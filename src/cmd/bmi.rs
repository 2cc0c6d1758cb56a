use anyhow::Result;
use serde_json::json;

use bmiplan::core::assess;
use bmiplan::core::units::{from_cm, round1};
use bmiplan::core::history::{self, HistoryStore};
use bmiplan::core::validate::RawInput;
use bmiplan::db::Database;
use bmiplan::i18n::{Catalog, Locale};
use bmiplan::models::config::Config;
use bmiplan::models::measurement::{Gender, HeightUnit, UnitPreference, WeightUnit};
use bmiplan::output;
use bmiplan::output::human;

pub struct BmiArgs<'a> {
    pub weight: &'a str,
    pub height: Option<&'a str>,
    pub age: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub weight_unit: Option<WeightUnit>,
    pub height_unit: Option<HeightUnit>,
    pub save: bool,
}

pub fn run(args: BmiArgs, lang: Option<Locale>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let tr = Catalog::new(lang.unwrap_or(config.locale));

    let units = UnitPreference {
        weight: args.weight_unit.unwrap_or(config.units.weight),
        height: args.height_unit.unwrap_or(config.units.height),
    };

    // Profile height is stored in cm; express it in the active unit.
    let profile_height = match (args.height, config.profile.height_cm) {
        (None, Some(h)) => Some(round1(from_cm(h, units.height)).to_string()),
        _ => None,
    };
    let profile_age = config.profile.age.map(|a| a.to_string());

    let raw = RawInput {
        weight: args.weight,
        height: args.height.or(profile_height.as_deref()).unwrap_or(""),
        age: args.age.or(profile_age.as_deref()).unwrap_or(""),
    };
    let gender = match args.gender {
        Some(g) => Gender::parse_lenient(g),
        None => config.profile.gender,
    };

    let assessment = assess::assess(&raw, gender, &units)?;

    let saved = if args.save {
        let db = Database::open(&Config::db_path())?;
        let mut store = HistoryStore::load(&db)?;
        store.append(history::entry_today(&assessment.measurement, &assessment.bmi))?;
        true
    } else {
        false
    };

    if human_flag {
        println!("{}", human::format_assessment(&assessment, &tr));
    } else {
        let mut data = output::assessment_json(&assessment, &tr);
        data["saved"] = json!(saved);
        let out = output::success("bmi", data);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
