use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::core::units::round1;
use crate::db::BlobStore;
use crate::models::bmi::BmiResult;
use crate::models::history::HistoryEntry;
use crate::models::measurement::Measurement;

pub const HISTORY_KEY: &str = "bmiHistory";
pub const HISTORY_LIMIT: usize = 10;

/// Bounded, newest-first log of BMI results, persisted whole on every change.
pub struct HistoryStore<'a> {
    store: &'a dyn BlobStore,
    entries: Vec<HistoryEntry>,
}

impl<'a> HistoryStore<'a> {
    /// Read the stored list. A missing or unreadable blob is an empty history.
    pub fn load(store: &'a dyn BlobStore) -> Result<Self> {
        let entries = match store.get(HISTORY_KEY)? {
            Some(blob) => match serde_json::from_str::<Vec<HistoryEntry>>(&blob) {
                Ok(mut entries) => {
                    entries.truncate(HISTORY_LIMIT);
                    entries
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discarding corrupt history");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self { store, entries })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Prepend, drop anything past the limit, persist.
    pub fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.persist()
    }

    /// Empty the list and remove the stored key. Returns how many were dropped.
    pub fn clear(&mut self) -> Result<usize> {
        let removed = self.entries.len();
        self.entries.clear();
        self.store.remove(HISTORY_KEY)?;
        Ok(removed)
    }

    fn persist(&self) -> Result<()> {
        let blob = serde_json::to_string(&self.entries)?;
        self.store.set(HISTORY_KEY, &blob)
    }
}

/// Snapshot a computed result as a history entry dated `date`.
pub fn entry_for(measurement: &Measurement, result: &BmiResult, date: NaiveDate) -> HistoryEntry {
    HistoryEntry {
        date: date.format("%Y-%m-%d").to_string(),
        weight: round1(measurement.weight_kg),
        height: round1(measurement.height_cm),
        bmi: result.value,
        category: result.category,
        child_advisory: result.child_advisory,
    }
}

/// Same as [`entry_for`], dated today in local time.
pub fn entry_today(measurement: &Measurement, result: &BmiResult) -> HistoryEntry {
    entry_for(measurement, result, Local::now().date_naive())
}
