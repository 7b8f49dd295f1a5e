//! Shared helper utilities for factory methods.

use chrono::NaiveDate;

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created row gets distinct default
/// field values to prevent accidental equality between rows.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique counter value narrowed to an `i32` column.
pub fn next_i32() -> i32 {
    (next_id() % i32::MAX as u64) as i32
}

/// Builds a calendar date for test fixtures.
///
/// # Panics
/// Panics when the components do not form a valid date, which is always a bug in
/// the calling test.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date should be valid")
}
