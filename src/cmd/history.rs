use anyhow::Result;
use serde_json::json;

use bmiplan::core::history::HistoryStore;
use bmiplan::db::Database;
use bmiplan::i18n::{Catalog, Locale, Translate};
use bmiplan::models::config::Config;
use bmiplan::output;
use bmiplan::output::human;

pub fn run_show(last: Option<usize>, lang: Option<Locale>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let tr = Catalog::new(lang.unwrap_or(config.locale));
    let db = Database::open(&Config::db_path())?;
    let store = HistoryStore::load(&db)?;

    let entries = store.entries();
    let entries = &entries[..last.unwrap_or(entries.len()).min(entries.len())];

    if human_flag {
        println!("{}", human::format_history(entries, &config.units, &tr));
    } else {
        let out = output::success("history", json!({ "entries": entries }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_clear(lang: Option<Locale>, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let tr = Catalog::new(lang.unwrap_or(config.locale));
    let db = Database::open(&Config::db_path())?;
    let mut store = HistoryStore::load(&db)?;
    let removed = store.clear()?;

    if human_flag {
        let count = removed.to_string();
        println!("{}", tr.translate_with("historyCleared", &[("count", &count)]));
    } else {
        let out = output::success("history", json!({ "removed": removed }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
