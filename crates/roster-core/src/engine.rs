//! The roster engine.
//!
//! Owns one roster and exposes every query and mutation on it. Operations are
//! synchronous and check-then-act: a rejected call leaves the roster exactly
//! as it was. The engine knows nothing about rendering, notifications, or
//! time; callers inspect the returned values and decide what to show.

use crate::error::{Result, RosterError};
use crate::model::{name_key, sample_roster, Record, MARKS_RANGE};
use crate::statistics::{average_tenths, highest_index, Average};

/// An explicitly owned roster of student records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEngine {
    records: Vec<Record>,
}

impl Default for RosterEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterEngine {
    /// A roster initialised from the sample seed.
    pub fn new() -> Self {
        Self {
            records: sample_roster(),
        }
    }

    /// A roster with no records.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a roster from arbitrary records, enforcing the name and marks
    /// invariants. Records are appended in order, as if added one by one.
    pub fn with_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut engine = Self::empty();
        for record in records {
            engine.add(&record.name, i64::from(record.marks))?;
        }
        Ok(engine)
    }

    /// The current records, in display order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record with the highest marks; the earliest one on ties.
    pub fn highest(&self) -> Result<&Record> {
        self.highest_position().map(|(_, record)| record)
    }

    /// Like [`highest`](Self::highest), but also returns the record's index.
    pub fn highest_position(&self) -> Result<(usize, &Record)> {
        let index = highest_index(&self.records).ok_or(RosterError::EmptyRoster)?;
        Ok((index, &self.records[index]))
    }

    /// Mean marks, rounded to one decimal place.
    pub fn average(&self) -> Result<Average> {
        average_tenths(&self.records).ok_or(RosterError::EmptyRoster)
    }

    /// Stable in-place sort by marks, highest first.
    pub fn sort_descending(&mut self) -> Result<()> {
        if self.is_empty() {
            return Err(RosterError::EmptyRoster);
        }
        self.records.sort_by(|a, b| b.marks.cmp(&a.marks));
        tracing::debug!(count = self.records.len(), "sorted roster by marks");
        Ok(())
    }

    /// Replace the roster with a fresh copy of the sample seed.
    pub fn reset(&mut self) {
        self.records = sample_roster();
        tracing::debug!(count = self.records.len(), "roster reset to sample");
    }

    /// Remove and return the last record.
    pub fn remove_last(&mut self) -> Result<Record> {
        let removed = self.records.pop().ok_or(RosterError::EmptyRoster)?;
        tracing::debug!(
            record = %removed,
            count = self.records.len(),
            "removed last record"
        );
        Ok(removed)
    }

    /// Validate a candidate and append it as the last record.
    ///
    /// The name is trimmed before storing. Checks run in order: blank name,
    /// marks range, duplicate name.
    pub fn add(&mut self, name: &str, marks: i64) -> Result<&Record> {
        let name = validate_name(name)?;
        let marks = validate_marks(marks)?;
        self.ensure_unique(name)?;

        self.records.push(Record::new(name, marks));
        let added = &self.records[self.records.len() - 1];
        tracing::debug!(record = %added, count = self.records.len(), "added record");
        Ok(added)
    }

    /// Validate raw form input and append it.
    ///
    /// `marks` must be an integer once surrounding whitespace is removed;
    /// blank, decimal, or otherwise non-numeric text is `InvalidMarks`.
    pub fn add_from_input(&mut self, name: &str, marks: &str) -> Result<&Record> {
        validate_name(name)?;
        let parsed = marks
            .trim()
            .parse::<i64>()
            .map_err(|_| RosterError::InvalidMarks {
                input: marks.to_string(),
            })?;
        self.add(name, parsed)
    }

    /// Whether a record with this name (ignoring case and surrounding
    /// whitespace) exists.
    pub fn contains_name(&self, name: &str) -> bool {
        let key = name_key(name.trim());
        self.records.iter().any(|r| r.has_name_key(&key))
    }

    fn ensure_unique(&self, name: &str) -> Result<()> {
        if self.contains_name(name) {
            tracing::debug!(name, "rejected duplicate name");
            return Err(RosterError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        tracing::debug!("rejected blank name");
        return Err(RosterError::InvalidName);
    }
    Ok(trimmed)
}

fn validate_marks(marks: i64) -> Result<u8> {
    if !MARKS_RANGE.contains(&marks) {
        tracing::debug!(marks, "rejected out-of-range marks");
        return Err(RosterError::InvalidMarks {
            input: marks.to_string(),
        });
    }
    // In range, so the conversion cannot fail.
    u8::try_from(marks).map_err(|_| RosterError::InvalidMarks {
        input: marks.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SAMPLE_SEED;

    fn names(engine: &RosterEngine) -> Vec<&str> {
        engine.list().iter().map(|r| r.name.as_str()).collect()
    }

    fn engine_with(marks: &[(&str, u8)]) -> RosterEngine {
        RosterEngine::with_records(marks.iter().map(|&(n, m)| Record::new(n, m))).unwrap()
    }

    #[test]
    fn starts_from_sample_seed() {
        let engine = RosterEngine::new();
        assert_eq!(engine.count(), 5);
        assert_eq!(names(&engine), ["Amit", "Priya", "Rahul", "Sneha", "Karan"]);
    }

    #[test]
    fn average_of_sample() {
        let engine = RosterEngine::new();
        assert_eq!(engine.average().unwrap().to_string(), "87.2");
    }

    #[test]
    fn average_matches_sum_over_count() {
        let engine = engine_with(&[("a", 85), ("b", 95), ("c", 70)]);
        // 250 / 3 = 83.33..
        assert_eq!(engine.average().unwrap().to_string(), "83.3");
        let engine = engine_with(&[("a", 85), ("b", 95)]);
        assert_eq!(engine.average().unwrap().to_string(), "90.0");
    }

    #[test]
    fn highest_of_sample_is_karan() {
        let engine = RosterEngine::new();
        let record = engine.highest().unwrap();
        assert_eq!(record.name, "Karan");
        assert_eq!(record.marks, 95);
    }

    #[test]
    fn highest_tie_returns_earliest() {
        let engine = engine_with(&[("a", 60), ("b", 90), ("c", 90), ("d", 10)]);
        let (index, record) = engine.highest_position().unwrap();
        assert_eq!(index, 1);
        assert_eq!(record.name, "b");
        assert!(engine.list().iter().all(|r| r.marks <= record.marks));
    }

    #[test]
    fn sort_is_descending_and_stable() {
        let mut engine = engine_with(&[
            ("a", 70),
            ("b", 90),
            ("c", 70),
            ("d", 100),
            ("e", 90),
            ("f", 70),
        ]);
        engine.sort_descending().unwrap();
        assert_eq!(names(&engine), ["d", "b", "e", "a", "c", "f"]);
        let marks: Vec<u8> = engine.list().iter().map(|r| r.marks).collect();
        assert!(marks.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn sort_sample() {
        let mut engine = RosterEngine::new();
        engine.sort_descending().unwrap();
        assert_eq!(names(&engine), ["Karan", "Priya", "Sneha", "Amit", "Rahul"]);
    }

    #[test]
    fn empty_roster_operations_fail_without_mutation() {
        let mut engine = RosterEngine::empty();
        assert_eq!(engine.highest().unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(engine.average().unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(engine.sort_descending().unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(engine.remove_last().unwrap_err(), RosterError::EmptyRoster);
        assert_eq!(engine, RosterEngine::empty());
    }

    #[test]
    fn reset_restores_sample_after_mutations() {
        let mut engine = RosterEngine::new();
        engine.add("Neha", 70).unwrap();
        engine.sort_descending().unwrap();
        engine.remove_last().unwrap();
        engine.remove_last().unwrap();

        engine.reset();
        let once = engine.clone();
        engine.reset();
        assert_eq!(engine, once);

        let expected: Vec<(&str, u8)> = engine
            .list()
            .iter()
            .map(|r| (r.name.as_str(), r.marks))
            .collect();
        assert_eq!(expected, SAMPLE_SEED);
    }

    #[test]
    fn reset_from_empty() {
        let mut engine = RosterEngine::empty();
        engine.reset();
        assert_eq!(engine, RosterEngine::new());
    }

    #[test]
    fn add_appends_last() {
        let mut engine = RosterEngine::new();
        let added = engine.add("Neha", 70).unwrap().clone();
        assert_eq!(added, Record::new("Neha", 70));
        assert_eq!(engine.count(), 6);
        assert_eq!(engine.list().last(), Some(&added));
    }

    #[test]
    fn add_rejects_out_of_range_marks() {
        let mut engine = RosterEngine::new();
        assert!(matches!(
            engine.add("Neha", 101),
            Err(RosterError::InvalidMarks { .. })
        ));
        assert!(matches!(
            engine.add("Neha", -1),
            Err(RosterError::InvalidMarks { .. })
        ));
        assert_eq!(engine.count(), 5);
        assert_eq!(engine, RosterEngine::new());
    }

    #[test]
    fn add_accepts_range_bounds() {
        let mut engine = RosterEngine::empty();
        engine.add("zero", 0).unwrap();
        engine.add("hundred", 100).unwrap();
        assert_eq!(engine.count(), 2);
    }

    #[test]
    fn add_rejects_case_insensitive_duplicate() {
        let mut engine = RosterEngine::new();
        assert_eq!(
            engine.add("amit", 50).unwrap_err(),
            RosterError::DuplicateName {
                name: "amit".into()
            }
        );
        assert!(engine.add("  KARAN ", 50).is_err());
        assert_eq!(engine.count(), 5);
    }

    #[test]
    fn contains_name_folds_case_and_whitespace() {
        let engine = RosterEngine::new();
        assert!(engine.contains_name("priya"));
        assert!(engine.contains_name("  SNEHA\t"));
        assert!(!engine.contains_name("Sneh"));
        assert!(!engine.contains_name("Snehaa"));
    }

    #[test]
    fn add_trims_name() {
        let mut engine = RosterEngine::empty();
        let record = engine.add("  Neha  ", 70).unwrap();
        assert_eq!(record.name, "Neha");
    }

    #[test]
    fn add_rejects_blank_name() {
        let mut engine = RosterEngine::new();
        assert_eq!(engine.add("", 50).unwrap_err(), RosterError::InvalidName);
        assert_eq!(engine.add("   ", 50).unwrap_err(), RosterError::InvalidName);
        assert_eq!(engine.count(), 5);
    }

    #[test]
    fn add_checks_name_before_marks() {
        let mut engine = RosterEngine::new();
        assert_eq!(engine.add(" ", 500).unwrap_err(), RosterError::InvalidName);
        assert!(matches!(
            engine.add("Amit", 500),
            Err(RosterError::InvalidMarks { .. })
        ));
    }

    #[test]
    fn add_from_input_parses_marks() {
        let mut engine = RosterEngine::new();
        engine.add_from_input("Neha", " 70 ").unwrap();
        assert_eq!(engine.list()[5], Record::new("Neha", 70));

        for bad in ["", "abc", "7.5", "101", "-3"] {
            assert!(
                matches!(
                    engine.add_from_input("Ravi", bad),
                    Err(RosterError::InvalidMarks { .. })
                ),
                "expected InvalidMarks for {bad:?}"
            );
        }
        assert_eq!(
            engine.add_from_input("", "abc").unwrap_err(),
            RosterError::InvalidName
        );
        assert_eq!(engine.count(), 6);
    }

    #[test]
    fn remove_last_until_empty() {
        let mut engine = RosterEngine::new();
        let mut expected: Vec<Record> = engine.list().to_vec();
        while let Some(last) = expected.pop() {
            assert_eq!(engine.remove_last().unwrap(), last);
            assert_eq!(engine.list(), expected.as_slice());
        }
        assert_eq!(engine.remove_last().unwrap_err(), RosterError::EmptyRoster);
    }

    #[test]
    fn with_records_enforces_invariants() {
        let dup = RosterEngine::with_records(vec![Record::new("A", 1), Record::new("a", 2)]);
        assert!(matches!(dup, Err(RosterError::DuplicateName { .. })));
        let over = RosterEngine::with_records(vec![Record::new("A", 101)]);
        assert!(matches!(over, Err(RosterError::InvalidMarks { .. })));
    }

    #[test]
    fn independent_engines_do_not_share_state() {
        let mut first = RosterEngine::new();
        let second = RosterEngine::new();
        first.remove_last().unwrap();
        first.add("Zoya", 40).unwrap();
        assert_eq!(second.count(), 5);
        assert_eq!(second.list()[4].name, "Karan");
    }
}
