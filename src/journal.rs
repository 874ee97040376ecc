//! Journal Store
//!
//! Per-day entry lists persisted under `YYYY-MM-DD` keys as JSON arrays,
//! plus daily totals, whole-store CSV export, and clear-all.

use thiserror::Error;

use crate::ids;
use crate::models::{DailyTotals, DayKey, EntryDraft, FoodEntry};
use crate::storage::StorageBackend;

/// Export download filename.
pub const EXPORT_FILENAME: &str = "food-journal-export.csv";
/// Export MIME type.
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";

const CSV_HEADER: &str = "date,food,calories,fat,carbs,protein";

/// User-facing journal failures. Both abort the operation with no state
/// change and surface as destructive notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    #[error("Please enter a food name")]
    EmptyFood,
    #[error("No entries to export")]
    NothingToExport,
}

/// Result of loading one day's record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayLoad {
    pub entries: Vec<FoodEntry>,
    /// The stored value existed but did not parse; the list was reset to
    /// empty and the caller should warn the user.
    pub malformed: bool,
}

/// Date-keyed entry store over an injected storage backend.
#[derive(Debug, Clone, Default)]
pub struct JournalStore<S> {
    storage: S,
}

impl<S: StorageBackend> JournalStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted record for a day. Absent key loads as an empty
    /// list; an unparseable record loads as empty with `malformed` set.
    pub fn load_day(&self, day: &DayKey) -> DayLoad {
        match self.storage.get(day.as_str()) {
            None => DayLoad::default(),
            Some(raw) => match serde_json::from_str::<Vec<FoodEntry>>(&raw) {
                Ok(entries) => DayLoad {
                    entries,
                    malformed: false,
                },
                Err(_) => DayLoad {
                    entries: Vec::new(),
                    malformed: true,
                },
            },
        }
    }

    /// Append a new entry to the day's list and persist the full list.
    /// An empty food name aborts with no mutation.
    pub fn add_entry(&mut self, day: &DayKey, draft: &EntryDraft) -> Result<FoodEntry, JournalError> {
        if draft.food.is_empty() {
            return Err(JournalError::EmptyFood);
        }

        let entry = FoodEntry {
            id: ids::next_id(),
            food: draft.food.clone(),
            calories: draft.calories,
            fat: draft.fat,
            carbs: draft.carbs,
            protein: draft.protein,
        };

        let mut entries = self.load_day(day).entries;
        entries.push(entry.clone());
        self.persist(day, &entries);
        Ok(entry)
    }

    /// Remove the entry with the matching id and re-persist. A
    /// nonexistent id is a no-op.
    pub fn delete_entry(&mut self, day: &DayKey, id: i64) {
        let mut entries = self.load_day(day).entries;
        entries.retain(|e| e.id != id);
        self.persist(day, &entries);
    }

    pub fn daily_totals(&self, day: &DayKey) -> DailyTotals {
        DailyTotals::of(&self.load_day(day).entries)
    }

    /// Flatten every persisted day into CSV, days in lexicographic
    /// (chronological) order. Fails when no entries exist anywhere.
    pub fn export_csv(&self) -> Result<String, JournalError> {
        let mut days: Vec<DayKey> = self
            .storage
            .keys()
            .iter()
            .filter_map(|k| DayKey::parse(k))
            .collect();
        days.sort();

        let mut rows = Vec::new();
        for day in &days {
            for entry in self.load_day(day).entries {
                rows.push(csv_row(day, &entry));
            }
        }

        if rows.is_empty() {
            return Err(JournalError::NothingToExport);
        }

        let mut csv = String::from(CSV_HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(&row);
        }
        Ok(csv)
    }

    /// Delete every day record. Irreversible; the UI gates this behind an
    /// explicit confirmation. Keys that are not day keys survive.
    pub fn clear_all(&mut self) {
        for key in self.storage.keys() {
            if DayKey::parse(&key).is_some() {
                self.storage.remove(&key);
            }
        }
    }

    fn persist(&mut self, day: &DayKey, entries: &[FoodEntry]) {
        if let Ok(json) = serde_json::to_string(entries) {
            self.storage.set(day.as_str(), &json);
        }
    }
}

fn csv_row(day: &DayKey, entry: &FoodEntry) -> String {
    [
        day.as_str().to_string(),
        entry.food.clone(),
        fmt_field(entry.calories),
        fmt_field(entry.fat),
        fmt_field(entry.carbs),
        fmt_field(entry.protein),
    ]
    .iter()
    .map(|v| csv_field(v))
    .collect::<Vec<_>>()
    .join(",")
}

fn fmt_field(value: Option<f64>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}

/// Quote a field only when it contains a comma, doubling internal quotes.
/// No other escaping, matching the export format consumers already parse.
fn csv_field(value: &str) -> String {
    if value.contains(',') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macro;
    use crate::storage::MemoryStorage;

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    fn draft(food: &str) -> EntryDraft {
        EntryDraft {
            food: food.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_absent_day_is_empty() {
        let store = JournalStore::new(MemoryStorage::new());
        let load = store.load_day(&day("2024-01-01"));
        assert!(load.entries.is_empty());
        assert!(!load.malformed);
    }

    #[test]
    fn test_add_and_load_round_trip() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let d = day("2024-03-05");

        let mut draft = draft("oatmeal");
        draft.set_macro(Macro::Fat, Some(3.0));
        draft.set_macro(Macro::Carbs, Some(27.0));
        draft.set_macro(Macro::Protein, Some(5.0));

        let added = store.add_entry(&d, &draft).unwrap();
        assert_eq!(added.calories, Some(3.0 * 9.0 + 27.0 * 4.0 + 5.0 * 4.0));

        let load = store.load_day(&d);
        assert_eq!(load.entries, vec![added]);
        assert_eq!(load.entries[0].food, "oatmeal");
    }

    #[test]
    fn test_add_empty_food_rejected_without_mutation() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let d = day("2024-03-05");
        store.add_entry(&d, &draft("rice")).unwrap();

        let err = store.add_entry(&d, &draft("")).unwrap_err();
        assert_eq!(err, JournalError::EmptyFood);
        assert_eq!(store.load_day(&d).entries.len(), 1);
    }

    #[test]
    fn test_add_generates_unique_ids() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let d = day("2024-03-05");
        for i in 0..5 {
            store.add_entry(&d, &draft(&format!("food {}", i))).unwrap();
        }
        let mut ids: Vec<i64> = store.load_day(&d).entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_delete_removes_exactly_one_and_persists() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let d = day("2024-03-05");
        let a = store.add_entry(&d, &draft("apple")).unwrap();
        let b = store.add_entry(&d, &draft("banana")).unwrap();

        store.delete_entry(&d, a.id);
        assert_eq!(store.load_day(&d).entries, vec![b.clone()]);

        // Nonexistent id is a no-op.
        store.delete_entry(&d, a.id);
        assert_eq!(store.load_day(&d).entries, vec![b]);
    }

    #[test]
    fn test_malformed_record_loads_empty_with_warning() {
        let mut storage = MemoryStorage::new();
        storage.set("2024-03-05", "{not json");
        let store = JournalStore::new(storage);

        let load = store.load_day(&day("2024-03-05"));
        assert!(load.entries.is_empty());
        assert!(load.malformed);
    }

    #[test]
    fn test_daily_totals() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let d = day("2024-03-05");
        store
            .add_entry(
                &d,
                &EntryDraft {
                    food: "a".into(),
                    calories: Some(100.0),
                    fat: Some(2.0),
                    carbs: Some(10.0),
                    protein: Some(5.0),
                },
            )
            .unwrap();
        store
            .add_entry(
                &d,
                &EntryDraft {
                    food: "b".into(),
                    calories: Some(200.0),
                    fat: Some(4.0),
                    carbs: Some(20.0),
                    protein: Some(10.0),
                },
            )
            .unwrap();

        let totals = store.daily_totals(&d);
        assert_eq!(totals.calories, 300.0);
        assert_eq!(totals.fat, 6.0);
        assert_eq!(totals.carbs, 30.0);
        assert_eq!(totals.protein, 15.0);
    }

    #[test]
    fn test_export_orders_days_chronologically() {
        let mut store = JournalStore::new(MemoryStorage::new());
        store.add_entry(&day("2024-01-02"), &draft("later")).unwrap();
        store.add_entry(&day("2024-01-01"), &draft("earlier")).unwrap();

        let csv = store.export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,food,calories,fat,carbs,protein");
        assert!(lines[1].starts_with("2024-01-01,earlier"));
        assert!(lines[2].starts_with("2024-01-02,later"));
    }

    #[test]
    fn test_export_quotes_comma_fields() {
        let mut store = JournalStore::new(MemoryStorage::new());
        store
            .add_entry(&day("2024-01-01"), &draft("rice, beans \"extra\""))
            .unwrap();

        let csv = store.export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], "2024-01-01,\"rice, beans \"\"extra\"\"\",,,,");
    }

    #[test]
    fn test_export_skips_foreign_keys_and_fails_when_empty() {
        let mut storage = MemoryStorage::new();
        storage.set("theme", "dark");
        let store = JournalStore::new(storage);
        assert_eq!(store.export_csv().unwrap_err(), JournalError::NothingToExport);
    }

    #[test]
    fn test_clear_all_leaves_foreign_keys() {
        let mut storage = MemoryStorage::new();
        storage.set("theme", "dark");
        let mut store = JournalStore::new(storage);
        store.add_entry(&day("2024-01-01"), &draft("gone")).unwrap();
        store.add_entry(&day("2024-01-02"), &draft("gone too")).unwrap();

        store.clear_all();
        assert!(store.load_day(&day("2024-01-01")).entries.is_empty());
        assert!(store.load_day(&day("2024-01-02")).entries.is_empty());
        assert_eq!(store.export_csv().unwrap_err(), JournalError::NothingToExport);
    }

    #[test]
    fn test_unset_fields_export_as_empty() {
        let mut store = JournalStore::new(MemoryStorage::new());
        let mut d = draft("water");
        d.set_calories(Some(0.0));
        store.add_entry(&day("2024-01-01"), &d).unwrap();

        let csv = store.export_csv().unwrap();
        assert_eq!(csv.lines().nth(1).unwrap(), "2024-01-01,water,0,,,");
    }
}
