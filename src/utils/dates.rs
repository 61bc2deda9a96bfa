//! Calendar helpers built on chrono.
//!
//! Rendering follows the long English style used on reports, e.g.
//! `January 2 2006` and `January 2nd, 2006`.

use chrono::{DateTime, Month, NaiveDate, NaiveTime, TimeZone};
use log::warn;

/// Input layout accepted by [`format_iso_date`]
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors that can occur while handling dates
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date '{input}': {source}")]
    Parse {
        input: String,
        source: chrono::ParseError,
    },
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_iso_date(date: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(date.trim(), ISO_DATE_FORMAT).map_err(|source| {
        warn!("There was an error loading the date {:?}", date);
        DateError::Parse {
            input: date.to_string(),
            source,
        }
    })
}

/// Re-render a `YYYY-MM-DD` date as `January 2 2006`.
///
/// # Examples
/// ```
/// use trafficutils::utils::dates::format_iso_date;
///
/// assert_eq!(format_iso_date("2018-03-09").unwrap(), "March 9 2018");
/// assert!(format_iso_date("09/03/2018").is_err());
/// ```
pub fn format_iso_date(date: &str) -> Result<String, DateError> {
    let parsed = parse_iso_date(date)?;
    Ok(parsed.format("%B %-d %Y").to_string())
}

/// English ordinal suffix for a day of the month
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    }
}

/// Render a date as `January 2nd, 2006`
pub fn format_with_suffix(date: NaiveDate) -> String {
    use chrono::Datelike;

    format!(
        "{}{}{}",
        date.format("%B %-d"),
        ordinal_suffix(date.day()),
        date.format(", %Y")
    )
}

/// Number of days in `month` of `year`, accounting for leap years
pub fn days_in_month(month: Month, year: i32) -> u32 {
    match month {
        Month::February => {
            if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Number of days in the month called `name`.
///
/// Unrecognised names count as 31 days.
pub fn days_in_named_month(name: &str, year: i32) -> u32 {
    match name.trim().parse::<Month>() {
        Ok(month) => days_in_month(month, year),
        Err(_) => 31,
    }
}

/// Resolve an English month name, falling back to January
pub fn month_from_name(name: &str) -> Month {
    name.trim().parse::<Month>().unwrap_or(Month::January)
}

/// Check whether `month` is one of `list`
pub fn month_in(month: Month, list: &[Month]) -> bool {
    list.contains(&month)
}

/// Midnight at the start of the same calendar day, in the same time zone.
///
/// Returns `None` when that local time does not exist (DST gap at midnight).
pub fn start_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    at_local_time(dt, NaiveTime::from_hms_opt(0, 0, 0)?)
}

/// 23:59:59 on the same calendar day, in the same time zone
pub fn end_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    at_local_time(dt, NaiveTime::from_hms_opt(23, 59, 59)?)
}

fn at_local_time<Tz: TimeZone>(dt: &DateTime<Tz>, time: NaiveTime) -> Option<DateTime<Tz>> {
    let local = dt.date_naive().and_time(time);
    dt.timezone().from_local_datetime(&local).earliest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Timelike, Utc};

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2006-01-02").unwrap(), "January 2 2006");
        assert_eq!(format_iso_date("2020-12-25").unwrap(), "December 25 2020");
        assert!(format_iso_date("2020-13-01").is_err());
        assert!(format_iso_date("").is_err());
    }

    #[test]
    fn test_format_iso_date_error_mentions_input() {
        let err = format_iso_date("not-a-date").unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date(" 2024-02-29 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(parse_iso_date("2023-02-29").is_err());
    }

    #[test]
    fn test_ordinal_suffix() {
        let expected = [
            (1, "st"), (2, "nd"), (3, "rd"), (4, "th"), (11, "th"), (12, "th"),
            (13, "th"), (21, "st"), (22, "nd"), (23, "rd"), (30, "th"), (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {}", day);
        }
    }

    #[test]
    fn test_format_with_suffix() {
        let date = NaiveDate::from_ymd_opt(2006, 1, 2).unwrap();
        assert_eq!(format_with_suffix(date), "January 2nd, 2006");

        let date = NaiveDate::from_ymd_opt(2018, 8, 11).unwrap();
        assert_eq!(format_with_suffix(date), "August 11th, 2018");

        let date = NaiveDate::from_ymd_opt(2019, 3, 31).unwrap();
        assert_eq!(format_with_suffix(date), "March 31st, 2019");
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(Month::January, 2021), 31);
        assert_eq!(days_in_month(Month::April, 2021), 30);
        assert_eq!(days_in_month(Month::February, 2021), 28);
        assert_eq!(days_in_month(Month::February, 2020), 29);
        assert_eq!(days_in_month(Month::February, 1900), 28);
        assert_eq!(days_in_month(Month::February, 2000), 29);
        assert_eq!(days_in_month(Month::December, 2021), 31);
    }

    #[test]
    fn test_days_in_named_month() {
        assert_eq!(days_in_named_month("September", 2021), 30);
        assert_eq!(days_in_named_month("February", 2024), 29);
        assert_eq!(days_in_named_month("Smarch", 2024), 31);
    }

    #[test]
    fn test_month_from_name() {
        assert_eq!(month_from_name("March"), Month::March);
        assert_eq!(month_from_name("November"), Month::November);
        assert_eq!(month_from_name("nonsense"), Month::January);
        assert_eq!(month_from_name(""), Month::January);
    }

    #[test]
    fn test_month_in() {
        let summer = [Month::June, Month::July, Month::August];
        assert!(month_in(Month::July, &summer));
        assert!(!month_in(Month::January, &summer));
        assert!(!month_in(Month::January, &[]));
    }

    #[test]
    fn test_start_and_end_of_day_utc() {
        let dt = Utc.with_ymd_and_hms(2021, 6, 15, 13, 45, 10).unwrap();

        let start = start_of_day(&dt).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2021, 6, 15, 0, 0, 0).unwrap());

        let end = end_of_day(&dt).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2021, 6, 15, 23, 59, 59).unwrap());
    }

    #[test]
    fn test_start_of_day_keeps_offset() {
        let offset = FixedOffset::east_opt(5 * 3600).unwrap();
        // 01:30 local on the 2nd is still the 1st in UTC
        let dt = offset.with_ymd_and_hms(2021, 3, 2, 1, 30, 0).unwrap();

        let start = start_of_day(&dt).unwrap();
        assert_eq!(start.date_naive(), dt.date_naive());
        assert_eq!(start.hour(), 0);
        assert_eq!(start.offset(), dt.offset());
    }
}
