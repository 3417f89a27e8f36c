use tabular_islamic::{
    DAYS_PER_CYCLE, EPOCH_OFFSET, TabIslamicDate, TabIslamicDateRange, days_in_month, days_in_year,
    is_leap_year, sdn_to_tab_islamic, tab_islamic_month_name, tab_islamic_to_sdn,
};
use tracing_subscriber::EnvFilter;

const CYCLE: i64 = DAYS_PER_CYCLE as i64;

/// Routes crate logs to the test output when `RUST_LOG` is set.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn signed(year: u64) -> i64 {
    i64::try_from(year).unwrap()
}

#[test]
fn range_guard_below_epoch() {
    init_logging();
    for sdn in (EPOCH_OFFSET - 1000..EPOCH_OFFSET).chain([0, -1, i64::MIN]) {
        assert_eq!(sdn_to_tab_islamic(sdn), (0, 0, 0), "sdn {sdn}");
    }
}

#[test]
fn field_bounds_over_four_cycles() {
    init_logging();
    for sdn in EPOCH_OFFSET..EPOCH_OFFSET + 4 * CYCLE {
        let (year, month, day) = sdn_to_tab_islamic(sdn);
        assert!(year >= 1, "sdn {sdn}: year {year}");
        assert!((1..=12).contains(&month), "sdn {sdn}: month {month}");
        assert!(
            day >= 1 && day <= days_in_month(year, month),
            "sdn {sdn}: day {day} of {year}-{month}"
        );
    }
}

#[test]
fn round_trip_over_four_cycles() {
    init_logging();
    for sdn in EPOCH_OFFSET..EPOCH_OFFSET + 4 * CYCLE {
        let (year, month, day) = sdn_to_tab_islamic(sdn);
        assert_eq!(
            tab_islamic_to_sdn(signed(year), month.into(), day.into()),
            sdn,
            "roundtrip failed for sdn {sdn}: ({year}, {month}, {day})"
        );
    }
}

#[test]
fn round_trip_far_from_epoch() {
    init_logging();
    let starts = [2_460_000, 10_000_000, 1_000_000_000_000, i64::MAX - 2 * CYCLE];
    for start in starts {
        for sdn in (start..start + 2 * CYCLE).step_by(11) {
            let date = TabIslamicDate::from_sdn(sdn).unwrap();
            assert_eq!(date.to_sdn().unwrap(), sdn, "sdn {sdn} -> {date}");
        }
    }
}

#[test]
fn monotonic_without_gaps() {
    init_logging();
    let mut previous = sdn_to_tab_islamic(EPOCH_OFFSET);
    assert_eq!(previous, (1, 1, 1));

    for sdn in EPOCH_OFFSET + 1..EPOCH_OFFSET + 3 * CYCLE {
        let current = sdn_to_tab_islamic(sdn);
        assert!(current > previous, "sdn {sdn}: {current:?} does not follow {previous:?}");

        let (year, month, day) = previous;
        let expected = if day < days_in_month(year, month) {
            (year, month, day + 1)
        } else if month < 12 {
            (year, month + 1, 1)
        } else {
            (year + 1, 1, 1)
        };
        assert_eq!(current, expected, "sdn {sdn} skipped or repeated a day");
        previous = current;
    }
}

#[test]
fn cycle_boundaries() {
    assert_eq!(sdn_to_tab_islamic(EPOCH_OFFSET), (1, 1, 1));
    assert_eq!(sdn_to_tab_islamic(EPOCH_OFFSET + CYCLE), (31, 1, 1));
    for cycle in 0..5_i64 {
        let first = EPOCH_OFFSET + cycle * CYCLE;
        let year = u64::try_from(cycle * 30 + 1).unwrap();
        assert_eq!(sdn_to_tab_islamic(first), (year, 1, 1), "cycle {cycle}");
        assert_eq!(sdn_to_tab_islamic(first - 1).0, year - 1, "cycle {cycle}");
    }
}

#[test]
fn leap_year_lengths_across_two_cycles() {
    let leap_positions = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
    for year in 1..=60_u64 {
        let position = (year - 1) % 30 + 1;
        let start = tab_islamic_to_sdn(signed(year), 1, 1);
        let next = tab_islamic_to_sdn(signed(year + 1), 1, 1);
        let length = next - start;

        if leap_positions.contains(&position) {
            assert_eq!(length, 355, "year {year}");
            assert!(is_leap_year(year), "year {year}");
        } else {
            assert_eq!(length, 354, "year {year}");
            assert!(!is_leap_year(year), "year {year}");
        }
        assert_eq!(i64::from(days_in_year(year)), length, "year {year}");
    }
}

#[test]
fn month_name_table() {
    assert_eq!(tab_islamic_month_name(13), "Extra");
    assert_eq!(tab_islamic_month_name(0), "");
    assert_eq!(tab_islamic_month_name(1), "Vendemiaire");
    for index in 1..=13 {
        assert!(!tab_islamic_month_name(index).is_empty(), "index {index}");
    }
}

#[test]
fn range_iteration_matches_forward_conversion() {
    let start = EPOCH_OFFSET + 5000;
    let end = start + 1000;
    let range = TabIslamicDateRange::from_sdns(start, end).unwrap();
    assert_eq!(range.len_days(), 1001);

    for (sdn, date) in (start..=end).zip(range) {
        assert_eq!(date.to_columns(), sdn_to_tab_islamic(sdn), "sdn {sdn}");
    }
}

#[test]
fn date_string_round_trip() {
    for sdn in (EPOCH_OFFSET..EPOCH_OFFSET + CYCLE).step_by(97) {
        let date = TabIslamicDate::from_sdn(sdn).unwrap();
        let parsed: TabIslamicDate = date.to_string().parse().unwrap();
        assert_eq!(parsed, date);

        let json = serde_json::to_string(&date).unwrap();
        let back: TabIslamicDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
