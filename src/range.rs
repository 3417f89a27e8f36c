use std::{cmp::Ordering, iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{ConversionError, ParseError, RANGE_SEPARATOR, TabIslamicDate, prelude::*};

/// Represents a range between two dates (inclusive).
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct TabIslamicDateRange {
    start:     TabIslamicDate,
    end:       TabIslamicDate,
    start_sdn: i64,
    end_sdn:   i64,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: TabIslamicDate, end: TabIslamicDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// An endpoint has no serial day number.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl TabIslamicDateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end, and
    /// `RangeError::Conversion` if an endpoint has no serial day number.
    pub fn new(start: TabIslamicDate, end: TabIslamicDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            start_sdn: start.to_sdn()?,
            end_sdn: end.to_sdn()?,
        })
    }

    /// Creates the range of dates between two serial day numbers (inclusive).
    ///
    /// # Errors
    /// Returns `RangeError::Conversion` if either number is before the epoch,
    /// and `RangeError::InvalidRange` if start > end.
    pub fn from_sdns(start_sdn: i64, end_sdn: i64) -> Result<Self, RangeError> {
        let start = TabIslamicDate::from_sdn(start_sdn)?;
        let end = TabIslamicDate::from_sdn(end_sdn)?;
        Self::new(start, end)
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> TabIslamicDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> TabIslamicDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (TabIslamicDate, TabIslamicDate) {
        (self.start, self.end)
    }

    /// Returns the serial day numbers of the start and end dates
    pub const fn sdns(&self) -> (i64, i64) {
        (self.start_sdn, self.end_sdn)
    }

    /// Number of days in the range, counting both ends
    pub const fn len_days(&self) -> u64 {
        self.end_sdn.abs_diff(self.start_sdn) + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &TabIslamicDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this range overlaps with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Iterates over every date in the range in order
    pub const fn iter(&self) -> Days {
        Days {
            front:     self.start,
            back:      self.end,
            remaining: self.len_days(),
        }
    }

    /// Converts to columns: (`start_year`, `start_month`, `start_day`, `end_year`, `end_month`, `end_day`)
    pub const fn to_columns(&self) -> (u64, u8, u8, u64, u8, u8) {
        let (sy, sm, sd) = self.start.to_columns();
        let (ey, em, ed) = self.end.to_columns();
        (sy, sm, sd, ey, em, ed)
    }
}

/// Iterator over the days of a [`TabIslamicDateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    front:     TabIslamicDate,
    back:      TabIslamicDate,
    remaining: u64,
}

impl Iterator for Days {
    type Item = TabIslamicDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            match current.next_day() {
                Some(next) => self.front = next,
                None => self.remaining = 0,
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            match current.previous_day() {
                Some(previous) => self.back = previous,
                None => self.remaining = 0,
            }
        }
        Some(current)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

impl IntoIterator for TabIslamicDateRange {
    type Item = TabIslamicDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &TabIslamicDateRange {
    type Item = TabIslamicDate;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for TabIslamicDateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<TabIslamicDate>()?;
                let end = end_str.trim().parse::<TabIslamicDate>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for TabIslamicDateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TabIslamicDateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for TabIslamicDateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TabIslamicDateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
