mod consts;
mod convert;
mod cycle;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use convert::{ConversionError, sdn_to_tab_islamic, tab_islamic_month_name, tab_islamic_to_sdn};
pub use cycle::Table;
pub use range::{Days, RangeError, TabIslamicDateRange};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A date in the Tabular Islamic calendar.
///
/// Dates order chronologically. The 30-year intercalation cycle has 11 leap
/// years of 355 days; in those years the last month has 30 days instead of 29.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct TabIslamicDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {_0} (must be at least 1)")]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u64, month: u8, day: i64 },
    #[display(fmt = "Invalid day: 0 (must be at least {})", MIN_DAY)]
    ZeroDay,
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl TabIslamicDate {
    /// Creates a date, validating each component.
    ///
    /// # Errors
    /// Returns `ParseError` if the year is below 1, the month is outside 1-12,
    /// or the day does not exist in that month of that year.
    pub fn new(year: i64, month: i64, day: i64) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (as u64 for convenience)
    pub const fn year(&self) -> u64 {
        self.year.get()
    }

    /// Returns the month (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Converts to columns: (year, month, day)
    pub const fn to_columns(&self) -> (u64, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Creates from columns: (year, month, day)
    ///
    /// # Errors
    /// Returns `ParseError` under the same rules as [`TabIslamicDate::new`]. A
    /// year above `i64::MAX` is an `InvalidFormat` error.
    pub fn from_columns(year: u64, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = i64::try_from(year)
            .map_err(|_| ParseError::InvalidFormat(format!("year {year} is out of range")))?;
        Self::new(year, month.into(), day.into())
    }

    /// Whether the date falls in a 355-day year
    pub fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// 1-based day of the year (1..=355)
    pub fn day_of_year(&self) -> u16 {
        cycle::period_start(&MONTH_END_DAYS, usize::from(self.month())) + u16::from(self.day())
    }

    /// Name of the month from the fixed name table
    pub fn month_name(&self) -> &'static str {
        self.month.name()
    }

    /// The following day, or `None` past the last representable year
    pub fn next_day(&self) -> Option<Self> {
        let (year, month, day) = (self.year, self.month, self.day.get());
        if day < self.days_in_month() {
            return Self::from_typed(year, month, i64::from(day) + 1);
        }
        if month.get() < MAX_MONTH {
            let next = Month::new(i64::from(month.get()) + 1).ok()?;
            return Self::from_typed(year, next, i64::from(MIN_DAY));
        }
        let first = Month::new(i64::from(FIRST_MONTH)).ok()?;
        Self::from_typed(year.succ()?, first, i64::from(MIN_DAY))
    }

    /// The preceding day, or `None` before 1 Muharram of year 1
    pub fn previous_day(&self) -> Option<Self> {
        let (year, month, day) = (self.year, self.month, self.day.get());
        if day > MIN_DAY {
            return Self::from_typed(year, month, i64::from(day) - 1);
        }
        if month.get() > FIRST_MONTH {
            let previous = Month::new(i64::from(month.get()) - 1).ok()?;
            return Self::from_typed(year, previous, i64::from(days_in_month(year.get(), previous.get())));
        }
        let year = year.pred()?;
        let last = Month::new(i64::from(MAX_MONTH)).ok()?;
        Self::from_typed(year, last, i64::from(days_in_month(year.get(), MAX_MONTH)))
    }

    /// Day of the week, 0 (Sunday) through 6 (Saturday)
    ///
    /// # Errors
    /// Returns `ConversionError::Overflow` if the date has no serial day number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(&self) -> Result<u8, ConversionError> {
        let sdn = self.to_sdn()?;
        // 0..7
        Ok(((sdn.rem_euclid(7) + 1) % 7) as u8)
    }

    /// Formats as `month/day/year` without padding
    pub fn format_mdy(&self) -> String {
        format!(
            "{}{MONTH_FIRST_SEPARATOR}{}{MONTH_FIRST_SEPARATOR}{}",
            self.month, self.day, self.year
        )
    }

    fn from_typed(year: Year, month: Month, day: i64) -> Option<Self> {
        let day = Day::new(day, year, month).ok()?;
        Some(Self { year, month, day })
    }
}

impl FromStr for TabIslamicDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // YYYY-MM-DD
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.len() {
            3 => {
                let year = Self::parse_component(parts[0])?;
                let month = Self::parse_component(parts[1])?;
                let day = Self::parse_component(parts[2])?;
                Self::new(year, month, day)
            },
            n if n < 3 => Err(ParseError::InvalidFormat(format!(
                "Too few {DATE_SEPARATOR} separators: expected 2, found {}",
                n - 1
            ))),
            n => Err(ParseError::InvalidFormat(format!(
                "Too many {DATE_SEPARATOR} separators: expected 2, found {}",
                n - 1
            ))),
        }
    }
}

impl TabIslamicDate {
    /// Helper to parse a numeric component with better error messages
    fn parse_component(s: &str) -> Result<i64, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i64, i64, i64)> for TabIslamicDate {
    type Error = ParseError;

    fn try_from(value: (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for TabIslamicDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for TabIslamicDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
