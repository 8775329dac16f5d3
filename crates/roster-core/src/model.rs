//! Core data model types for roster.
//!
//! A roster is an ordered list of [`Record`]s. Order is significant: it is the
//! display order and the removal order.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Inclusive range of valid marks.
pub const MARKS_RANGE: RangeInclusive<i64> = 0..=100;

/// The fixed sample dataset a roster starts from and resets to.
pub const SAMPLE_SEED: [(&str, u8); 5] = [
    ("Amit", 85),
    ("Priya", 92),
    ("Rahul", 76),
    ("Sneha", 88),
    ("Karan", 95),
];

/// One student and their marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Display name, stored trimmed.
    pub name: String,
    /// Marks in `0..=100`.
    pub marks: u8,
}

impl Record {
    pub fn new(name: impl Into<String>, marks: u8) -> Self {
        Self {
            name: name.into(),
            marks,
        }
    }

    /// Whether this record's name folds to `key`, as produced by
    /// [`name_key`].
    pub fn has_name_key(&self, key: &str) -> bool {
        self.name
            .chars()
            .flat_map(char::to_lowercase)
            .eq(key.chars())
    }
}

/// Case-folded form of a name, as compared by the uniqueness invariant.
pub fn name_key(name: &str) -> String {
    name.chars().flat_map(char::to_lowercase).collect()
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.marks)
    }
}

/// A fresh, owned copy of the sample dataset.
pub fn sample_roster() -> Vec<Record> {
    SAMPLE_SEED
        .iter()
        .map(|&(name, marks)| Record::new(name, marks))
        .collect()
}
