//! Conversions between serial day numbers and Tabular Islamic dates.
//!
//! [`TabIslamicDate::from_sdn`] and [`TabIslamicDate::to_sdn`] report failures
//! as [`ConversionError`]. The free functions keep the calendar library's
//! sentinel convention: `(0, 0, 0)` or `0` for input outside the supported
//! range, and a panic when the tables themselves are inconsistent.

use tracing::{debug, error};

use crate::consts::{EPOCH_OFFSET, MONTH_NAMES};
use crate::cycle::{CycleTables, Exhausted, STANDARD_TABLES, Table};
use crate::types::{Month, Year};
use crate::{ParseError, TabIslamicDate};

/// Error type for conversions between serial day numbers and dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The serial day number precedes the first day of year 1.
    #[error("Serial day number {sdn} is before the epoch ({})", EPOCH_OFFSET)]
    BeforeEpoch { sdn: i64 },

    /// The date's serial day number does not fit in an `i64`.
    #[error("Serial day number of year {year} is out of range")]
    Overflow { year: u64 },

    /// A table scan found no upper bound for a value the arithmetic guarantees
    /// is in range. The tables are corrupt.
    #[error("Internal inconsistency: no {table} table entry above {value}")]
    TableExhausted { table: Table, value: u16 },

    /// The date components are not valid.
    #[error(transparent)]
    Invalid(#[from] ParseError),
}

impl From<Exhausted> for ConversionError {
    fn from(exhausted: Exhausted) -> Self {
        Self::TableExhausted {
            table: exhausted.table,
            value: exhausted.value,
        }
    }
}

impl TabIslamicDate {
    /// Converts a serial day number to a date.
    ///
    /// # Errors
    /// Returns `ConversionError::BeforeEpoch` if `sdn` is less than
    /// `EPOCH_OFFSET`, and `ConversionError::TableExhausted` if the calendar
    /// tables are inconsistent.
    pub fn from_sdn(sdn: i64) -> Result<Self, ConversionError> {
        Self::from_sdn_with(&STANDARD_TABLES, sdn)
    }

    pub(crate) fn from_sdn_with(tables: &CycleTables<'_>, sdn: i64) -> Result<Self, ConversionError> {
        let offset = sdn
            .checked_sub(EPOCH_OFFSET)
            .and_then(|offset| u64::try_from(offset).ok())
            .ok_or(ConversionError::BeforeEpoch { sdn })?;

        let fields = tables.split(offset)?;
        let year = i64::try_from(fields.year).map_err(|_| ConversionError::Overflow { year: fields.year })?;

        Ok(Self::new(year, fields.month.into(), fields.day.into())?)
    }

    /// Converts this date to its serial day number.
    ///
    /// # Errors
    /// Returns `ConversionError::Overflow` if the result does not fit in an `i64`.
    pub fn to_sdn(&self) -> Result<i64, ConversionError> {
        fields_to_sdn(self.year(), self.month(), self.day())
    }
}

/// Serial day number of fields already checked against the tables.
fn fields_to_sdn(year: u64, month: u8, day: u8) -> Result<i64, ConversionError> {
    STANDARD_TABLES
        .join(year, month, day)
        .and_then(|offset| i64::try_from(offset).ok())
        .and_then(|offset| offset.checked_add(EPOCH_OFFSET))
        .ok_or(ConversionError::Overflow { year })
}

/// Converts a serial day number to `(year, month, day)`.
///
/// Returns `(0, 0, 0)` when `sdn` is before the first day of year 1. There is no
/// upper bound.
///
/// # Panics
/// Panics if the calendar tables are internally inconsistent. This cannot
/// happen with the tables this crate ships.
pub fn sdn_to_tab_islamic(sdn: i64) -> (u64, u8, u8) {
    fields_or_sentinel(TabIslamicDate::from_sdn(sdn))
}

fn fields_or_sentinel(result: Result<TabIslamicDate, ConversionError>) -> (u64, u8, u8) {
    match result {
        Ok(date) => date.to_columns(),
        Err(err @ ConversionError::TableExhausted { .. }) => {
            error!(%err, "calendar tables are inconsistent");
            panic!("{err}");
        },
        Err(err) => {
            debug!(%err, "no conversion");
            (0, 0, 0)
        },
    }
}

/// Converts `(year, month, day)` to a serial day number.
///
/// Returns 0 when the year is below 1, the month is outside 1-12, or the day
/// is outside the range the month table allows (1-30 for odd months and
/// month 12, 1-29 otherwise). Month 12 accepts day 30 in every year; in a
/// common year that is the serial day number of the next year's first day.
/// Convert the result back with [`sdn_to_tab_islamic`] to check whether a
/// triple is a real date.
pub fn tab_islamic_to_sdn(year: i64, month: i64, day: i64) -> i64 {
    table_date_to_sdn(year, month, day).unwrap_or_else(|err| {
        debug!(%err, year, month, day, "no conversion");
        0
    })
}

fn table_date_to_sdn(year: i64, month: i64, day: i64) -> Result<i64, ConversionError> {
    let year = Year::new(year)?;
    let month = Month::new(month)?;

    let max_day = STANDARD_TABLES.table_month_length(month.get());
    let day = u8::try_from(day)
        .ok()
        .filter(|&d| d >= 1 && u16::from(d) <= max_day)
        .ok_or(ParseError::InvalidDay {
            year: year.get(),
            month: month.get(),
            day,
        })?;

    fields_to_sdn(year.get(), month.get(), day)
}

/// Name of month `index`: 1-12 are months, 13 names the extra days.
///
/// Returns an empty string for 0 and any index outside the table.
pub fn tab_islamic_month_name(index: i64) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .unwrap_or("")
}
