//! Splitting a day offset into cycle, year, month and day, and joining it back.
//!
//! Everything here works on the day offset from the epoch (`sdn - EPOCH_OFFSET`).
//! Both directions read the same cumulative tables, so the leap structure is
//! defined in exactly one place.

use tracing::trace;

use crate::consts::{CYCLE_YEARS, DAYS_PER_CYCLE, MONTH_END_DAYS, YEAR_END_DAYS};
use crate::prelude::*;

/// The cumulative end-of-period tables a conversion scans.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CycleTables<'a> {
    pub(crate) year_end_days:  &'a [u16],
    pub(crate) month_end_days: &'a [u16],
}

/// The tables of the Tabular Islamic calendar.
pub(crate) const STANDARD_TABLES: CycleTables<'static> = CycleTables {
    year_end_days:  &YEAR_END_DAYS,
    month_end_days: &MONTH_END_DAYS,
};

/// Which table a scan ran off the end of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Table {
    #[display(fmt = "year-end")]
    YearEndDays,
    #[display(fmt = "month-end")]
    MonthEndDays,
}

/// A scan found no entry above `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Exhausted {
    pub(crate) table: Table,
    pub(crate) value: u16,
}

/// Calendar fields of a day offset. `month` and `day` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fields {
    pub(crate) year:  u64,
    pub(crate) month: u8,
    pub(crate) day:   u8,
}

/// 1-based position of the first entry of `table` strictly greater than `value`.
///
/// `table` must be sorted ascending. Returns `None` when every entry is less
/// than or equal to `value`.
pub(crate) fn upper_bound_position<T: Ord>(table: &[T], value: &T) -> Option<usize> {
    let index = table.partition_point(|end| end <= value);
    (index < table.len()).then_some(index + 1)
}

/// Cumulative total through the period before `position` (1-based).
#[inline]
pub(crate) fn period_start(table: &[u16], position: usize) -> u16 {
    position.checked_sub(2).map_or(0, |previous| table[previous])
}

/// Cumulative total through the period at `position` (1-based).
#[inline]
pub(crate) fn period_end(table: &[u16], position: usize) -> u16 {
    table[position - 1]
}

/// Position of `year` (>= 1) within its cycle, 1..=30.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn year_in_cycle(year: u64) -> usize {
    debug_assert!(year != 0);
    // < CYCLE_YEARS
    (year.saturating_sub(1) % CYCLE_YEARS) as usize + 1
}

impl CycleTables<'_> {
    /// Splits a non-negative day offset into calendar fields.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn split(&self, offset: u64) -> Result<Fields, Exhausted> {
        let cycle = offset / DAYS_PER_CYCLE;
        let day_in_cycle = (offset % DAYS_PER_CYCLE) as u16; // < DAYS_PER_CYCLE

        let year_in_cycle =
            upper_bound_position(self.year_end_days, &day_in_cycle).ok_or(Exhausted {
                table: Table::YearEndDays,
                value: day_in_cycle,
            })?;
        let day_in_year = day_in_cycle - period_start(self.year_end_days, year_in_cycle);

        let month = upper_bound_position(self.month_end_days, &day_in_year).ok_or(Exhausted {
            table: Table::MonthEndDays,
            value: day_in_year,
        })?;
        let day_in_month = day_in_year - period_start(self.month_end_days, month) + 1;

        trace!(cycle, year_in_cycle, day_in_year, month, day_in_month, "split day offset");

        Ok(Fields {
            year:  cycle * CYCLE_YEARS + year_in_cycle as u64,
            // month <= 12, day <= 30
            month: month as u8,
            day:   day_in_month as u8,
        })
    }

    /// Joins calendar fields back into a day offset.
    ///
    /// `year` must be >= 1 and `month` in 1..=12; `day` is not checked against
    /// the month length. Returns `None` when the offset does not fit in `u64`.
    pub(crate) fn join(&self, year: u64, month: u8, day: u8) -> Option<u64> {
        let cycle = year.saturating_sub(1) / CYCLE_YEARS;
        let day_in_cycle = u64::from(period_start(self.year_end_days, year_in_cycle(year)))
            + u64::from(period_start(self.month_end_days, usize::from(month)))
            + u64::from(day).saturating_sub(1);

        cycle.checked_mul(DAYS_PER_CYCLE)?.checked_add(day_in_cycle)
    }

    /// Days in `year`, taken from consecutive differences of the year table.
    pub(crate) fn days_in_year(&self, year: u64) -> u16 {
        let position = year_in_cycle(year);
        period_end(self.year_end_days, position) - period_start(self.year_end_days, position)
    }

    /// Days in `month` of `year`. The last month is cut short by the year length.
    pub(crate) fn days_in_month(&self, year: u64, month: u8) -> u16 {
        let position = usize::from(month);
        let end = period_end(self.month_end_days, position).min(self.days_in_year(year));
        end - period_start(self.month_end_days, position)
    }

    /// Month length as the month table alone states it, shared by all years.
    pub(crate) fn table_month_length(&self, month: u8) -> u16 {
        let position = usize::from(month);
        period_end(self.month_end_days, position) - period_start(self.month_end_days, position)
    }
}
