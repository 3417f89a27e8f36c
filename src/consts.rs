/// Serial day number of 1 Muharram, year 1 (the first day of the calendar)
pub const EPOCH_OFFSET: i64 = 1_948_440;

/// Years in one intercalation cycle
pub const CYCLE_YEARS: u64 = 30;

/// Days in one intercalation cycle (11 leap years and 19 common years)
pub const DAYS_PER_CYCLE: u64 = 10_631;

/// Days in a common year
pub const COMMON_YEAR_DAYS: u16 = 354;
/// Days in a leap year
pub const LEAP_YEAR_DAYS: u16 = 355;

/// Maximum valid month
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number of the first month of the year
pub const FIRST_MONTH: u8 = 1;

/// Cumulative day count at the end of each year of the 30-year cycle.
///
/// Year lengths are the differences between consecutive entries; this table is
/// the only place leap years are defined.
#[rustfmt::skip]
pub const YEAR_END_DAYS: [u16; 30] = [
    354, 709, 1063, 1417, 1772, 2126, 2481, 2835, 3189, 3544,
    3898, 4252, 4607, 4961, 5315, 5670, 6024, 6379, 6733, 7087,
    7442, 7796, 8150, 8505, 8859, 9214, 9568, 9922, 10277, 10631,
];

/// Cumulative day count at the end of each month.
///
/// The last month ends on day 355 in every year. A common year only has 354
/// days, so its day 355 is never reached: the year table rolls over first.
pub const MONTH_END_DAYS: [u16; 12] = [30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 355];

/// Month names indexed by month number (index 0 is empty, 13 names the extra days)
pub const MONTH_NAMES: [&str; 14] = [
    "",
    "Vendemiaire",
    "Brumaire",
    "Frimaire",
    "Nivose",
    "Pluviose",
    "Ventose",
    "Germinal",
    "Floreal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
    "Extra",
];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (`start/end`)
pub const RANGE_SEPARATOR: char = '/';
/// Separator of the month-first date string (`M/D/Y`)
pub const MONTH_FIRST_SEPARATOR: char = '/';

const fn is_strictly_increasing(table: &[u16]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i] <= table[i - 1] {
            return false;
        }
        i += 1;
    }
    true
}

const fn has_lunar_year_lengths(table: &[u16]) -> bool {
    let mut previous = 0;
    let mut i = 0;
    while i < table.len() {
        let length = table[i] - previous;
        if length != COMMON_YEAR_DAYS && length != LEAP_YEAR_DAYS {
            return false;
        }
        previous = table[i];
        i += 1;
    }
    true
}

const _: () = assert!(is_strictly_increasing(&YEAR_END_DAYS));
const _: () = assert!(is_strictly_increasing(&MONTH_END_DAYS));
const _: () = assert!(has_lunar_year_lengths(&YEAR_END_DAYS));
const _: () = assert!(YEAR_END_DAYS.len() as u64 == CYCLE_YEARS);
const _: () = assert!(YEAR_END_DAYS[YEAR_END_DAYS.len() - 1] as u64 == DAYS_PER_CYCLE);
const _: () = assert!(MONTH_END_DAYS.len() == MAX_MONTH as usize);
const _: () = assert!(MONTH_END_DAYS[MONTH_END_DAYS.len() - 1] == LEAP_YEAR_DAYS);
