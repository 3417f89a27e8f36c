//! Constructors shared by the unit tests.

use crate::{TabIslamicDate, TabIslamicDateRange};

pub fn date(year: i64, month: i64, day: i64) -> TabIslamicDate {
    TabIslamicDate::new(year, month, day).unwrap_or_else(|err| panic!("invalid test date {year}-{month}-{day}: {err}"))
}

pub fn range(start: TabIslamicDate, end: TabIslamicDate) -> TabIslamicDateRange {
    TabIslamicDateRange::new(start, end).unwrap_or_else(|err| panic!("invalid test range {start}/{end}: {err}"))
}
