//! Derived views over a list of records: maximum and class average.
//!
//! The average is the binary `f64` mean rounded to one decimal the way a
//! fixed-point formatter rounds it: to the tenth nearest the exact value of
//! the float, with exact ties going up. A mean of 90.25 is exact in binary
//! and becomes 90.3; 1807 / 20 is stored just below 90.35 and becomes 90.3.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::model::Record;

/// A class average rounded to one decimal place, stored as tenths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Average {
    tenths: u64,
}

impl Average {
    pub fn from_tenths(tenths: u64) -> Self {
        Self { tenths }
    }

    pub fn tenths(&self) -> u64 {
        self.tenths
    }

    pub fn as_f64(&self) -> f64 {
        self.tenths as f64 / 10.0
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.tenths / 10, self.tenths % 10)
    }
}

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Index of the record with the highest marks.
///
/// Ties resolve to the earliest record. Returns `None` for an empty slice.
pub fn highest_index(records: &[Record]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, record) in records.iter().enumerate() {
        match best {
            Some(b) if records[b].marks >= record.marks => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Mean of all marks, rounded to one decimal place.
///
/// Returns `None` for an empty slice.
pub fn average_tenths(records: &[Record]) -> Option<Average> {
    if records.is_empty() {
        return None;
    }
    let sum: u64 = records.iter().map(|r| u64::from(r.marks)).sum();
    let mean = sum as f64 / records.len() as f64;
    Some(Average::from_tenths(fixed_tenths(mean)))
}

/// `floor(10 * value + 1/2)`, evaluated on the exact binary value of a
/// non-negative finite `value`.
fn fixed_tenths(value: f64) -> u64 {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };
    if mantissa == 0 {
        return 0;
    }
    if exponent >= 0 {
        return (mantissa << exponent) * 10;
    }
    // value = mantissa / 2^shift
    let shift = exponent.unsigned_abs();
    if shift >= 120 {
        return 0;
    }
    let numerator = 20 * u128::from(mantissa) + (1u128 << shift);
    (numerator >> (shift + 1)) as u64
}
