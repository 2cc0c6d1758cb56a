use bmiplan::i18n::Locale;
use bmiplan::models::config::Config;
use bmiplan::models::measurement::{Gender, HeightUnit, UnitPreference, WeightUnit};
use bmiplan::models::plan::{ActivityLevel, Goal, PlanPolicy};
use bmiplan::models::{BmiCategory, HistoryEntry};
use std::ffi::OsString;
use std::sync::{LazyLock, Mutex};
use tempfile::TempDir;

static CONFIG_ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

struct BmiplanHomeGuard {
    previous: Option<OsString>,
}

impl BmiplanHomeGuard {
    fn set(path: &std::path::Path) -> Self {
        let previous = std::env::var_os("BMIPLAN_HOME");
        // SAFETY: tests that touch BMIPLAN_HOME are serialized by CONFIG_ENV_LOCK.
        unsafe { std::env::set_var("BMIPLAN_HOME", path) };
        Self { previous }
    }
}

impl Drop for BmiplanHomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => {
                // SAFETY: tests that touch BMIPLAN_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::set_var("BMIPLAN_HOME", value) };
            }
            None => {
                // SAFETY: tests that touch BMIPLAN_HOME are serialized by CONFIG_ENV_LOCK.
                unsafe { std::env::remove_var("BMIPLAN_HOME") };
            }
        }
    }
}

fn with_temp_home<T>(f: impl FnOnce() -> T) -> T {
    let _lock = CONFIG_ENV_LOCK.lock().unwrap();
    let dir = TempDir::new().unwrap();
    let _home = BmiplanHomeGuard::set(dir.path());
    f()
}

// ─── Config ──────────────────────────────────────────────────────────────────

#[test]
fn test_config_default() {
    let cfg = Config::default();
    assert_eq!(cfg.locale, Locale::En);
    assert_eq!(cfg.units.weight, WeightUnit::Kg);
    assert_eq!(cfg.units.height, HeightUnit::Cm);
    assert!(cfg.profile.height_cm.is_none());
    assert!(cfg.profile.age.is_none());
    assert!(cfg.profile.gender.is_none());
    assert_eq!(cfg.plan.loss_deficit_kcal, 500.0);
    assert_eq!(cfg.plan.gain_surplus_kcal, 300.0);
    assert!(!cfg.plan.calorie_floor);
    assert_eq!(cfg.plan.floor_female_kcal, 1200.0);
    assert_eq!(cfg.plan.floor_male_kcal, 1500.0);
}

#[test]
fn test_config_set_valid_keys() {
    let mut cfg = Config::default();
    cfg.set("height", "172.5").unwrap();
    cfg.set("age", "41").unwrap();
    cfg.set("gender", "f").unwrap();
    cfg.set("units.weight", "lb").unwrap();
    cfg.set("units.height", "in").unwrap();
    cfg.set("plan.gain_surplus", "500").unwrap();
    cfg.set("plan.calorie_floor", "true").unwrap();
    cfg.set("locale", "pt").unwrap();

    assert_eq!(cfg.profile.height_cm, Some(172.5));
    assert_eq!(cfg.profile.age, Some(41));
    assert_eq!(cfg.profile.gender, Some(Gender::Female));
    assert_eq!(cfg.units.weight, WeightUnit::Lb);
    assert_eq!(cfg.units.height, HeightUnit::In);
    assert_eq!(cfg.plan.gain_surplus_kcal, 500.0);
    assert!(cfg.plan.calorie_floor);
    assert_eq!(cfg.locale, Locale::Pt);
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut cfg = Config::default();
    assert!(cfg.set("height", "-3").is_err());
    assert!(cfg.set("height", "tall").is_err());
    assert!(cfg.set("age", "1").is_err());
    assert!(cfg.set("age", "121").is_err());
    assert!(cfg.set("gender", "x").is_err());
    assert!(cfg.set("units.weight", "stone").is_err());
    assert!(cfg.set("plan.loss_deficit", "-100").is_err());
    assert!(cfg.set("locale", "fr").is_err());
    assert!(cfg.set("nope", "1").is_err());

    assert!(cfg.profile.height_cm.is_none());
    assert!(cfg.profile.age.is_none());
    assert_eq!(cfg.plan.loss_deficit_kcal, 500.0);
}

#[test]
fn test_config_toml_round_trip() {
    let mut cfg = Config::default();
    cfg.set("height", "180").unwrap();
    cfg.set("gender", "male").unwrap();
    cfg.set("locale", "es").unwrap();
    let text = toml::to_string_pretty(&cfg).unwrap();
    let back: Config = toml::from_str(&text).unwrap();
    assert_eq!(back.profile.height_cm, Some(180.0));
    assert_eq!(back.profile.gender, Some(Gender::Male));
    assert_eq!(back.locale, Locale::Es);
}

#[test]
fn test_config_partial_toml_fills_defaults() {
    let cfg: Config = toml::from_str("[plan]\ncalorie_floor = true\n").unwrap();
    assert!(cfg.plan.calorie_floor);
    assert_eq!(cfg.plan.gain_surplus_kcal, 300.0);
    assert_eq!(cfg.units, UnitPreference::default());
    assert_eq!(cfg.locale, Locale::En);
}

#[test]
fn test_config_save_and_load() {
    with_temp_home(|| {
        let mut cfg = Config::default();
        cfg.set("age", "30").unwrap();
        cfg.set("units.weight", "lb").unwrap();
        cfg.save().unwrap();

        assert!(Config::path().exists());
        let loaded = Config::load().unwrap();
        assert_eq!(loaded.profile.age, Some(30));
        assert_eq!(loaded.units.weight, WeightUnit::Lb);
    });
}

#[test]
fn test_config_load_missing_is_default() {
    with_temp_home(|| {
        let cfg = Config::load().unwrap();
        assert!(cfg.profile.age.is_none());
    });
}

#[test]
fn test_config_paths_follow_home_env() {
    with_temp_home(|| {
        let dir = Config::data_dir();
        assert_eq!(Config::path(), dir.join("config.toml"));
        assert_eq!(Config::db_path(), dir.join("data.db"));
    });
}

// ─── Enums ───────────────────────────────────────────────────────────────────

#[test]
fn test_gender_parsing() {
    assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
    assert_eq!(" f ".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("other".parse::<Gender>().unwrap(), Gender::Other);
    assert!("".parse::<Gender>().is_err());
    assert_eq!(Gender::parse_lenient("unknown"), None);
}

#[test]
fn test_activity_parsing_and_factors() {
    assert_eq!("moderate".parse::<ActivityLevel>().unwrap(), ActivityLevel::Moderately);
    assert_eq!("active".parse::<ActivityLevel>().unwrap(), ActivityLevel::Very);
    assert_eq!(ActivityLevel::parse_or_default("couch"), ActivityLevel::Sedentary);
    assert_eq!(ActivityLevel::Sedentary.factor(), 1.2);
    assert_eq!(ActivityLevel::Lightly.factor(), 1.375);
    assert_eq!(ActivityLevel::Moderately.factor(), 1.55);
    assert_eq!(ActivityLevel::Very.factor(), 1.725);
    assert_eq!(ActivityLevel::Extra.factor(), 1.9);
}

#[test]
fn test_goal_parsing() {
    assert_eq!("lose".parse::<Goal>().unwrap(), Goal::Loss);
    assert_eq!("GAIN".parse::<Goal>().unwrap(), Goal::Gain);
    assert_eq!(Goal::parse_or_default(""), Goal::Maintenance);
}

#[test]
fn test_unit_toggled_and_display() {
    assert_eq!(WeightUnit::Kg.toggled(), WeightUnit::Lb);
    assert_eq!(HeightUnit::In.toggled(), HeightUnit::Cm);
    assert_eq!(WeightUnit::Lb.to_string(), "lb");
    assert_eq!("inches".parse::<HeightUnit>().unwrap(), HeightUnit::In);
}

#[test]
fn test_plan_policy_default_matches_config_default() {
    assert_eq!(PlanPolicy::default(), Config::default().plan);
}

#[test]
fn test_history_entry_omits_false_child_flag() {
    let e = HistoryEntry {
        date: "2026-01-01".into(),
        weight: 70.0,
        height: 175.0,
        bmi: 22.9,
        category: BmiCategory::Normal,
        child_advisory: false,
    };
    let json = serde_json::to_value(&e).unwrap();
    assert!(json.get("child_advisory").is_none());
    assert_eq!(json["category"], "normal");

    let back: HistoryEntry = serde_json::from_value(json).unwrap();
    assert_eq!(back, e);
}
