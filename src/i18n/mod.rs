//! Translation of the opaque tags emitted by the core.
//!
//! The core never formats prose itself. It hands out tags such as
//! `bmiNormal` or `riskWeakenedImmuneSystem`, and a [`Translate`]
//! implementation resolves them for the active locale.

mod en;
mod es;
mod pt;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
    Pt,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::En => write!(f, "en"),
            Self::Es => write!(f, "es"),
            Self::Pt => write!(f, "pt"),
        }
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "pt" => Ok(Self::Pt),
            _ => anyhow::bail!("unsupported locale: {} (expected en/es/pt)", s),
        }
    }
}

pub trait Translate {
    /// Resolve a tag to display text.
    fn translate(&self, key: &str) -> String;

    /// Resolve a tag and substitute `{name}` placeholders.
    fn translate_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut text = self.translate(key);
        for (name, value) in params {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

/// Built-in tables. Missing keys fall back to English, then to the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn table(locale: Locale) -> &'static [(&'static str, &'static str)] {
        match locale {
            Locale::En => en::ENTRIES,
            Locale::Es => es::ENTRIES,
            Locale::Pt => pt::ENTRIES,
        }
    }

    fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
        Self::table(locale)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        Self::lookup(self.locale, key)
            .or_else(|| Self::lookup(Locale::En, key))
            .unwrap_or(key)
            .to_string()
    }
}
