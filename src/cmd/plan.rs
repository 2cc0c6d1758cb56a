use anyhow::Result;

use bmiplan::core::history::HistoryStore;
use bmiplan::core::plan::{self, RawPlanInput};
use bmiplan::db::Database;
use bmiplan::i18n::{Catalog, Locale};
use bmiplan::models::config::Config;
use bmiplan::output;
use bmiplan::output::human;

pub struct PlanArgs<'a> {
    pub weight: Option<&'a str>,
    pub height: Option<&'a str>,
    pub age: Option<&'a str>,
    pub gender: Option<&'a str>,
    pub activity: &'a str,
    pub goal: &'a str,
}

pub fn run(args: PlanArgs, lang: Option<Locale>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let tr = Catalog::new(lang.unwrap_or(config.locale));

    // Fall back to the newest recorded measurement, then to the profile.
    let latest = if args.weight.is_none() || args.height.is_none() {
        let db = Database::open(&Config::db_path())?;
        let store = HistoryStore::load(&db)?;
        store.latest().cloned()
    } else {
        None
    };
    let weight = args
        .weight
        .map(str::to_string)
        .or_else(|| latest.as_ref().map(|e| e.weight.to_string()));
    let height = args
        .height
        .map(str::to_string)
        .or_else(|| config.profile.height_cm.map(|h| h.to_string()))
        .or_else(|| latest.as_ref().map(|e| e.height.to_string()));
    let age = args
        .age
        .map(str::to_string)
        .or_else(|| config.profile.age.map(|a| a.to_string()));
    let gender = args
        .gender
        .map(str::to_string)
        .or_else(|| config.profile.gender.map(|g| g.to_string()));

    let raw = RawPlanInput {
        weight_kg: weight.as_deref(),
        height_cm: height.as_deref(),
        age: age.as_deref(),
        gender: gender.as_deref(),
        activity: Some(args.activity),
        goal: Some(args.goal),
    };
    let nutrition = plan::plan_from_raw(&raw, &config.plan)?;

    if human_flag {
        println!("{}", human::format_plan(&nutrition, &tr));
    } else {
        let out = output::success("plan", output::plan_json(&nutrition, &tr));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
