//! Calendar type aliases and constants
//!
//! Declarations only: no date arithmetic or calendar conversion is provided
//! here. Consumers that need to compute with dates build on top of these.

/// Day of month, 1-based (1..=31).
pub type DayOfMonth = u8;

/// Months in a Gregorian year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Days in a week.
pub const DAYS_PER_WEEK: usize = 7;

/// Largest valid [`DayOfMonth`].
pub const MAX_DAY_OF_MONTH: DayOfMonth = 31;

/// Days per month in a non-leap year, indexed by zero-based month.
pub const DAYS_PER_MONTH: [DayOfMonth; MONTHS_PER_YEAR] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_per_month_totals_non_leap_year() {
        let total: u32 = DAYS_PER_MONTH.iter().map(|&d| u32::from(d)).sum();
        assert_eq!(total, 365);
    }

    #[test]
    fn max_day_matches_table() {
        assert_eq!(DAYS_PER_MONTH.iter().copied().max(), Some(MAX_DAY_OF_MONTH));
    }
}
