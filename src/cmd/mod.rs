pub mod bmi;
pub mod completions;
pub mod config;
pub mod convert;
pub mod history;
pub mod init;
pub mod plan;

use bmiplan::i18n::{Catalog, Locale};
use bmiplan::models::config::Config;

/// Translator for the `--lang` override, else the configured locale.
pub fn catalog(lang: Option<Locale>) -> Catalog {
    let locale = lang.unwrap_or_else(|| Config::load().map(|c| c.locale).unwrap_or_default());
    Catalog::new(locale)
}
