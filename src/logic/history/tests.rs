use super::*;
use crate::constants::HISTORY_KEY;
use crate::logic::storage::{FileStore, KeyValueStore, MemoryStore};

fn inputs(age: f64) -> FeatureMap {
    let mut map = FeatureMap::new();
    map.insert("age".to_string(), age);
    map.insert("thalach".to_string(), 150.0);
    map
}

#[test]
fn test_empty_history() {
    let history = HistoryStore::initialize(MemoryStore::new(), 10);
    assert!(history.is_empty());
    assert_eq!(history.latest(), None);
    assert!(history.latest_record().is_none());
    assert_eq!(history.all().len(), 0);
}

#[test]
fn test_add_then_latest() {
    let mut history = HistoryStore::initialize(MemoryStore::new(), 10);

    history.add(0.42, inputs(63.0));
    assert_eq!(history.latest(), Some(0.42));

    history.add(0.07, inputs(30.0));
    assert_eq!(history.latest(), Some(0.07));
    assert_eq!(history.latest_record().unwrap().inputs["age"], 30.0);
}

#[test]
fn test_all_is_newest_first() {
    let mut history = HistoryStore::initialize(MemoryStore::new(), 10);
    for p in [0.1, 0.2, 0.3, 0.4] {
        history.add(p, FeatureMap::new());
    }

    let probabilities: Vec<f64> = history.all().map(|r| r.probability).collect();
    assert_eq!(probabilities, vec![0.4, 0.3, 0.2, 0.1]);
}

#[test]
fn test_reload_reproduces_history() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::initialize(store.clone(), 10);
    history.add(0.15, inputs(40.0));
    history.add(0.85, inputs(70.0));
    let before: Vec<PredictionRecord> = history.all().cloned().collect();

    // Simulate an app reload against the same storage
    let reloaded = HistoryStore::initialize(store, 10);
    let after: Vec<PredictionRecord> = reloaded.all().cloned().collect();

    assert_eq!(before, after);
}

#[test]
fn test_reload_from_file_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut history = HistoryStore::initialize(FileStore::new(dir.path()), 10);
    history.add(0.55, inputs(58.0));
    let store = history.dispose();

    let reloaded = HistoryStore::initialize(store, 10);
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.latest(), Some(0.55));
}

#[test]
fn test_corrupt_storage_starts_empty() {
    let mut store = MemoryStore::new();
    store.write(HISTORY_KEY, "{not json").unwrap();

    let history = HistoryStore::initialize(store, 10);
    assert!(history.is_empty());
}

#[test]
fn test_loads_records_without_inputs() {
    let mut store = MemoryStore::new();
    store
        .write(
            HISTORY_KEY,
            r#"[{"probability":0.3,"timestamp":"2025-01-02T03:04:05.678Z"}]"#,
        )
        .unwrap();

    let history = HistoryStore::initialize(store, 10);
    let record = history.latest_record().unwrap();
    assert_eq!(record.probability, 0.3);
    assert!(record.inputs.is_empty());
}

#[test]
fn test_persisted_format() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::initialize(store.clone(), 10);
    history.add(0.2, inputs(45.0));
    history.add(0.9, inputs(65.0));

    let raw = store.read(HISTORY_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = value.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["probability"], 0.9);
    assert_eq!(array[0]["inputs"]["age"], 65.0);
    assert!(array[0]["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_write_failure_keeps_memory_update() {
    // Quota too small for any serialized record
    let store = MemoryStore::with_quota(8);
    let mut history = HistoryStore::initialize(store.clone(), 10);

    history.add(0.66, inputs(50.0));

    assert_eq!(history.latest(), Some(0.66));
    assert_eq!(store.read(HISTORY_KEY).unwrap(), None);
}

#[test]
fn test_retention_cap_evicts_oldest() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::initialize(store.clone(), 3);
    for p in [0.1, 0.2, 0.3, 0.4, 0.5] {
        history.add(p, FeatureMap::new());
    }

    let probabilities: Vec<f64> = history.all().map(|r| r.probability).collect();
    assert_eq!(probabilities, vec![0.5, 0.4, 0.3]);

    // A smaller cap on reload truncates the stored list
    let reloaded = HistoryStore::initialize(store, 2);
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.latest(), Some(0.5));
}

#[test]
fn test_clear_removes_persisted_list() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::initialize(store.clone(), 10);
    history.add(0.4, FeatureMap::new());

    history.clear();

    assert!(history.is_empty());
    assert_eq!(store.read(HISTORY_KEY).unwrap(), None);
    assert!(HistoryStore::initialize(store, 10).is_empty());
}

#[test]
fn test_stats() {
    let mut history = HistoryStore::initialize(MemoryStore::new(), 10);
    assert_eq!(history.stats().average_probability, None);

    history.add(0.2, FeatureMap::new());
    history.add(0.6, FeatureMap::new());

    let stats = history.stats();
    assert_eq!(stats.total_records, 2);
    assert_eq!(stats.max_records, 10);
    assert!((stats.average_probability.unwrap() - 0.4).abs() < 1e-9);
    assert_eq!(stats.highest_probability, Some(0.6));
    assert_eq!(stats.lowest_probability, Some(0.2));
    assert!(stats.newest >= stats.oldest);
}

#[test]
fn test_invalid_probability_is_refused_and_history_survives_reload() {
    let store = MemoryStore::new();
    let mut history = HistoryStore::initialize(store.clone(), 10);
    history.add(0.2, inputs(40.0));
    history.add(0.3, inputs(50.0));

    for bad in [f64::NAN, f64::INFINITY, -0.1, 1.5] {
        assert!(history.add(bad, inputs(60.0)).is_none());
    }
    assert_eq!(history.len(), 2);
    assert_eq!(history.latest(), Some(0.3));

    let reloaded = HistoryStore::initialize(store, 10);
    let probabilities: Vec<f64> = reloaded.all().map(|r| r.probability).collect();
    assert_eq!(probabilities, vec![0.3, 0.2]);
}

#[test]
fn test_probability_bounds_are_accepted() {
    let mut history = HistoryStore::initialize(MemoryStore::new(), 10);
    assert!(history.add(0.0, FeatureMap::new()).is_some());
    assert_eq!(history.add(1.0, FeatureMap::new()).map(|r| r.probability), Some(1.0));
}
