use crate::ParseError;
use crate::consts::{LEAP_YEAR_DAYS, MAX_MONTH, MONTH_NAMES};
use crate::cycle::STANDARD_TABLES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::num::NonZeroU8;

/// A year value guaranteed to be in the range `1..=i64::MAX`
/// Uses `NonZeroU64` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Year(NonZeroU64);

impl Year {
    /// Creates a new Year, validating that it's at least 1
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or negative.
    pub fn new(value: i64) -> Result<Self, ParseError> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// Returns the year value as u64
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// The following year, or `None` past `i64::MAX`
    pub fn succ(self) -> Option<Self> {
        i64::try_from(self.get()).ok()?.checked_add(1).and_then(|next| Self::new(next).ok())
    }

    /// The preceding year, or `None` before year 1
    pub fn pred(self) -> Option<Self> {
        self.get().checked_sub(1).and_then(NonZeroU64::new).map(Self)
    }

    /// Whether this year has 355 days
    #[inline]
    pub fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<i64> for Year {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u64 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is outside 1-12.
    pub fn new(value: i64) -> Result<Self, ParseError> {
        u8::try_from(value)
            .ok()
            .filter(|&m| m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Name of the month from the fixed name table
    pub fn name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.get())]
    }
}

impl TryFrom<i64> for Month {
    type Error = ParseError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or exceeds the month length.
    pub fn new(value: i64, year: Year, month: Month) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   value,
        };

        let day = u8::try_from(value).map_err(|_| invalid())?;
        if day > days_in_month(year.get(), month.get()) {
            return Err(invalid());
        }
        NonZeroU8::new(day).map(Self).ok_or_else(invalid)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate the upper bound without year/month context
        NonZeroU8::new(value).map(Self).ok_or(ParseError::ZeroDay)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions, all read from the cumulative tables

/// Number of days in `year` (354 or 355)
pub fn days_in_year(year: u64) -> u16 {
    debug_assert!(year != 0);
    STANDARD_TABLES.days_in_year(year)
}

/// Whether `year` is one of the 11 leap years of its cycle
pub fn is_leap_year(year: u64) -> bool {
    days_in_year(year) == LEAP_YEAR_DAYS
}

/// Number of days in `month` of `year`
#[allow(clippy::cast_possible_truncation)]
pub fn days_in_month(year: u64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    // at most 30
    STANDARD_TABLES.days_in_month(year, month) as u8
}
