//! Date helpers for entry ranges.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{PlanCalError, PlanCalResult};

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";
const LONG_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Inclusive end date of an entry that starts on `start` and lasts `num_days`,
/// or None past the last representable date.
pub fn checked_end_date(start: NaiveDate, num_days: u32) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(num_days.max(MIN_DAYS) - 1)))
}

/// Inclusive end date, saturating at `NaiveDate::MAX`. Form input is checked
/// with [`check_range`] before it gets here.
pub fn end_date_for(start: NaiveDate, num_days: u32) -> NaiveDate {
    checked_end_date(start, num_days).unwrap_or(NaiveDate::MAX)
}

/// The day after `date`, saturating at `NaiveDate::MAX`.
pub fn day_after(date: NaiveDate) -> NaiveDate {
    date.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
}

/// An entry starting on `start` must have a representable end date and a
/// representable day after it (the calendar's exclusive bound).
pub fn check_range(start: NaiveDate, num_days: u32) -> PlanCalResult<()> {
    checked_end_date(start, num_days)
        .and_then(|end| end.checked_add_days(Days::new(1)))
        .map(|_| ())
        .ok_or_else(|| PlanCalError::InvalidDate(format_date(start)))
}

/// Clamp a requested day count into 1..=30.
pub fn clamp_days(num_days: i64) -> u32 {
    num_days.clamp(i64::from(MIN_DAYS), i64::from(MAX_DAYS)) as u32
}

/// Parse a day count as typed into the form, clamping it into range.
pub fn parse_days(s: &str) -> PlanCalResult<u32> {
    s.trim()
        .parse::<i64>()
        .map(clamp_days)
        .map_err(|_| PlanCalError::InvalidNumber(s.to_string()))
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> PlanCalResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| PlanCalError::InvalidDate(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// e.g. "Saturday, June 01, 2024"
pub fn format_long(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Parse YYYY-MM into the first day of that month.
pub fn parse_month(s: &str) -> PlanCalResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), DATE_FORMAT)
        .map_err(|_| PlanCalError::InvalidMonth(s.to_string()))
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.month() {
        12 => NaiveDate::from_ymd_opt(first.year() + 1, 1, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m + 1, 1),
    }
    .unwrap_or(first)
}

/// First day of the month before the one containing `date`.
pub fn previous_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    match first.month() {
        1 => NaiveDate::from_ymd_opt(first.year() - 1, 12, 1),
        m => NaiveDate::from_ymd_opt(first.year(), m - 1, 1),
    }
    .unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_date_for() {
        assert_eq!(end_date_for(date(2024, 6, 1), 3), date(2024, 6, 3));
        assert_eq!(end_date_for(date(2024, 6, 1), 1), date(2024, 6, 1));
        assert_eq!(end_date_for(date(2024, 2, 28), 2), date(2024, 2, 29));
        assert_eq!(end_date_for(date(2024, 12, 31), 30), date(2025, 1, 29));
    }

    #[test]
    fn test_end_date_for_zero_days_is_single_day() {
        assert_eq!(end_date_for(date(2024, 6, 1), 0), date(2024, 6, 1));
    }

    #[test]
    fn test_end_date_near_max_date() {
        assert_eq!(checked_end_date(NaiveDate::MAX, 1), Some(NaiveDate::MAX));
        assert_eq!(checked_end_date(NaiveDate::MAX, 2), None);
        assert_eq!(end_date_for(NaiveDate::MAX, 5), NaiveDate::MAX);
        assert_eq!(day_after(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(day_after(date(2024, 6, 30)), date(2024, 7, 1));
    }

    #[test]
    fn test_check_range() {
        assert!(check_range(date(2024, 6, 1), 30).is_ok());
        assert!(matches!(
            check_range(NaiveDate::MAX, 1),
            Err(PlanCalError::InvalidDate(_))
        ));
        let near_max = NaiveDate::MAX - chrono::Duration::days(3);
        assert!(check_range(near_max, 3).is_ok());
        assert!(check_range(near_max, 4).is_err());
    }

    #[test]
    fn test_far_future_date_parses_but_fails_range_check() {
        let start = parse_date("+262142-12-31").unwrap();
        assert!(check_range(start, 1).is_err());
    }

    #[test]
    fn test_last_of_month() {
        assert_eq!(last_of_month(date(2024, 2, 10)), date(2024, 2, 29));
        assert_eq!(last_of_month(date(2024, 12, 1)), date(2024, 12, 31));
        assert_eq!(last_of_month(NaiveDate::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days(-4), 1);
        assert_eq!(clamp_days(0), 1);
        assert_eq!(clamp_days(15), 15);
        assert_eq!(clamp_days(31), 30);
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days(" 3 ").unwrap(), 3);
        assert_eq!(parse_days("99").unwrap(), 30);
        assert!(parse_days("three").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-06-01").unwrap(), date(2024, 6, 1));
        assert!(matches!(
            parse_date("06/01/2024"),
            Err(PlanCalError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_format_long() {
        assert_eq!(format_long(date(2024, 6, 1)), "Saturday, June 01, 2024");
        assert_eq!(format_long(date(2024, 6, 3)), "Monday, June 03, 2024");
    }

    #[test]
    fn test_month_navigation() {
        assert_eq!(parse_month("2024-06").unwrap(), date(2024, 6, 1));
        assert!(parse_month("2024-13").is_err());
        assert_eq!(next_month(date(2024, 12, 15)), date(2025, 1, 1));
        assert_eq!(previous_month(date(2024, 1, 15)), date(2023, 12, 1));
        assert_eq!(next_month(date(2024, 6, 30)), date(2024, 7, 1));
    }
}
