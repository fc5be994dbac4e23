//! Prediction History Store
//!
//! Newest-first log of past predictions, persisted to the device's
//! key-value storage under `predictionHistory`.
//!
//! Flow:
//! 1. `initialize` loads the persisted list (falls back to empty on any error)
//! 2. `add` prepends a record and writes the whole list back (best-effort)
//! 3. other features read `latest()` to tailor their requests
//!
//! Persistence never fails the caller: read errors yield an empty history,
//! write errors keep the in-memory update and are only logged.

pub mod types;

#[cfg(test)]
mod tests;

use std::collections::VecDeque;

use crate::constants::HISTORY_KEY;
use crate::logic::storage::{KeyValueStore, StorageError};

pub use types::{FeatureMap, HistoryStats, PredictionRecord};

pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    records: VecDeque<PredictionRecord>,
    max_records: usize,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load history from storage. Never fails.
    pub fn initialize(store: S, max_records: usize) -> Self {
        let max_records = max_records.max(1);

        let mut records = match load(&store) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!("Failed to load prediction history, starting empty: {}", e);
                VecDeque::new()
            }
        };

        if records.len() > max_records {
            tracing::info!(
                "Dropping {} stored predictions over the retention cap",
                records.len() - max_records
            );
            records.truncate(max_records);
        }

        tracing::debug!(
            "Prediction history initialized: loaded={}, max={}",
            records.len(),
            max_records
        );

        Self {
            store,
            records,
            max_records,
        }
    }

    /// Record a new prediction and persist the updated list.
    ///
    /// Probabilities outside [0, 1] (including NaN) are refused and None is
    /// returned; they could not be written back as valid JSON.
    pub fn add(&mut self, probability: f64, inputs: FeatureMap) -> Option<&PredictionRecord> {
        if !PredictionRecord::is_valid_probability(probability) {
            tracing::warn!("Refusing to store invalid probability {}", probability);
            return None;
        }

        self.records.push_front(PredictionRecord::new(probability, inputs));

        // Keep at most max_records, evicting the oldest
        self.records.truncate(self.max_records);

        if let Err(e) = self.persist() {
            tracing::error!("Failed to save prediction history: {}", e);
        }

        tracing::info!(
            "Stored prediction {:.4} (history size: {})",
            probability,
            self.records.len()
        );

        self.records.front()
    }

    /// Probability of the newest record
    pub fn latest(&self) -> Option<f64> {
        self.records.front().map(|r| r.probability)
    }

    pub fn latest_record(&self) -> Option<&PredictionRecord> {
        self.records.front()
    }

    /// All records, newest first
    pub fn all(&self) -> impl ExactSizeIterator<Item = &PredictionRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Discard every record, in memory and on disk
    pub fn clear(&mut self) {
        self.records.clear();
        if let Err(e) = self.store.remove(HISTORY_KEY) {
            tracing::error!("Failed to remove stored prediction history: {}", e);
        }
        tracing::info!("Cleared prediction history");
    }

    pub fn stats(&self) -> HistoryStats {
        let probabilities = || self.records.iter().map(|r| r.probability);
        let total = self.records.len();

        HistoryStats {
            total_records: total,
            max_records: self.max_records,
            average_probability: (total > 0).then(|| probabilities().sum::<f64>() / total as f64),
            highest_probability: probabilities().reduce(f64::max),
            lowest_probability: probabilities().reduce(f64::min),
            newest: self.records.front().map(|r| r.timestamp),
            oldest: self.records.back().map(|r| r.timestamp),
        }
    }

    /// Final best-effort flush; returns the backing store
    pub fn dispose(mut self) -> S {
        if !self.records.is_empty() {
            if let Err(e) = self.persist() {
                tracing::error!("Failed to flush prediction history: {}", e);
            }
        }
        self.store
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.records)?;
        self.store.write(HISTORY_KEY, &json)
    }
}

fn load<S: KeyValueStore>(store: &S) -> Result<VecDeque<PredictionRecord>, StorageError> {
    match store.read(HISTORY_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(VecDeque::new()),
    }
}
