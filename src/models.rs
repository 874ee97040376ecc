//! Data Model
//!
//! Journal and plotter entities shared between the logic and view layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One logged food item, owned by its day's entry list.
///
/// Immutable after creation except via delete. Numeric fields stay unset
/// until the user provides them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: i64,
    pub food: String,
    #[serde(with = "loose_number", default)]
    pub calories: Option<f64>,
    #[serde(with = "loose_number", default)]
    pub fat: Option<f64>,
    #[serde(with = "loose_number", default)]
    pub carbs: Option<f64>,
    #[serde(with = "loose_number", default)]
    pub protein: Option<f64>,
}

/// Numeric fields in persisted records may be numbers, numeric strings, or
/// `""` for unset (older records mix all three). Reads accept any of them;
/// writes keep the `""`-for-unset convention.
mod loose_number {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, ser: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(n) => ser.serialize_f64(*n),
            None => ser.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<f64>, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f64),
            Text(String),
        }

        Ok(match Option::<Raw>::deserialize(de)? {
            Some(Raw::Num(n)) => Some(n),
            Some(Raw::Text(t)) => t.trim().parse().ok(),
            None => None,
        })
    }
}

/// Calories derived from a full macronutrient triple (kcal per gram:
/// fat 9, carbs 4, protein 4).
pub fn derived_calories(fat: f64, carbs: f64, protein: f64) -> f64 {
    fat * 9.0 + carbs * 4.0 + protein * 4.0
}

/// Macronutrient fields of a draft entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Fat,
    Carbs,
    Protein,
}

/// Mutable form state for a new entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub food: String,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub carbs: Option<f64>,
    pub protein: Option<f64>,
}

impl EntryDraft {
    /// Set one macro field. When the updated triple is fully set the
    /// calories field is recomputed and overwrites any manual value.
    pub fn set_macro(&mut self, field: Macro, value: Option<f64>) {
        match field {
            Macro::Fat => self.fat = value,
            Macro::Carbs => self.carbs = value,
            Macro::Protein => self.protein = value,
        }
        if let (Some(f), Some(c), Some(p)) = (self.fat, self.carbs, self.protein) {
            self.calories = Some(derived_calories(f, c, p));
        }
    }

    /// Direct edit of the calories field (only sticks while the macro
    /// triple is incomplete).
    pub fn set_calories(&mut self, value: Option<f64>) {
        self.calories = value;
    }
}

/// Date key in `YYYY-MM-DD` form, the storage key for one day's list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(String);

impl DayKey {
    /// Strict shape check: ten bytes, digits everywhere except dashes at
    /// positions 4 and 7.
    pub fn parse(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
            return None;
        }
        let digits_ok = b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
        digits_ok.then(|| DayKey(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sum of each numeric field across a day's entries; unset counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DailyTotals {
    pub calories: f64,
    pub fat: f64,
    pub carbs: f64,
    pub protein: f64,
}

impl DailyTotals {
    pub fn of(entries: &[FoodEntry]) -> Self {
        entries.iter().fold(Self::default(), |acc, e| Self {
            calories: acc.calories + e.calories.unwrap_or(0.0),
            fat: acc.fat + e.fat.unwrap_or(0.0),
            carbs: acc.carbs + e.carbs.unwrap_or(0.0),
            protein: acc.protein + e.protein.unwrap_or(0.0),
        })
    }
}

/// A plotted point in logical coordinates, session-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_triple_derives_calories() {
        let mut draft = EntryDraft::default();
        draft.set_macro(Macro::Fat, Some(2.0));
        draft.set_macro(Macro::Carbs, Some(10.0));
        assert_eq!(draft.calories, None);
        draft.set_macro(Macro::Protein, Some(5.0));
        assert_eq!(draft.calories, Some(2.0 * 9.0 + 10.0 * 4.0 + 5.0 * 4.0));
    }

    #[test]
    fn test_derivation_overwrites_manual_calories() {
        let mut draft = EntryDraft::default();
        draft.set_calories(Some(999.0));
        draft.set_macro(Macro::Fat, Some(1.0));
        draft.set_macro(Macro::Carbs, Some(1.0));
        assert_eq!(draft.calories, Some(999.0));
        draft.set_macro(Macro::Protein, Some(1.0));
        assert_eq!(draft.calories, Some(17.0));
    }

    #[test]
    fn test_zero_gram_macros_still_derive() {
        let mut draft = EntryDraft::default();
        draft.set_macro(Macro::Fat, Some(0.0));
        draft.set_macro(Macro::Carbs, Some(20.0));
        draft.set_macro(Macro::Protein, Some(0.0));
        assert_eq!(draft.calories, Some(80.0));
    }

    #[test]
    fn test_day_key_parse() {
        assert!(DayKey::parse("2024-01-31").is_some());
        assert!(DayKey::parse("2024-1-31").is_none());
        assert!(DayKey::parse("2024/01/31").is_none());
        assert!(DayKey::parse("2024-01-31x").is_none());
        assert!(DayKey::parse("settings").is_none());
        assert!(DayKey::parse("").is_none());
    }

    #[test]
    fn test_entry_accepts_legacy_record_shapes() {
        // Written by older versions: numbers, numeric strings, and "".
        let json = r#"{"id":1700000000000,"food":"toast","calories":"230","fat":2,"carbs":"","protein":null}"#;
        let entry: FoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.calories, Some(230.0));
        assert_eq!(entry.fat, Some(2.0));
        assert_eq!(entry.carbs, None);
        assert_eq!(entry.protein, None);
    }

    #[test]
    fn test_daily_totals_treat_unset_as_zero() {
        let entries = vec![
            FoodEntry {
                id: 1,
                food: "a".into(),
                calories: Some(100.0),
                fat: Some(2.0),
                carbs: Some(10.0),
                protein: Some(5.0),
            },
            FoodEntry {
                id: 2,
                food: "b".into(),
                calories: Some(200.0),
                fat: Some(4.0),
                carbs: Some(20.0),
                protein: Some(10.0),
            },
            FoodEntry {
                id: 3,
                food: "c".into(),
                calories: None,
                fat: None,
                carbs: None,
                protein: None,
            },
        ];
        let totals = DailyTotals::of(&entries);
        assert_eq!(totals.calories, 300.0);
        assert_eq!(totals.fat, 6.0);
        assert_eq!(totals.carbs, 30.0);
        assert_eq!(totals.protein, 15.0);
    }
}
