//! Joined-date parsing.
//!
//! Employee sources write dates in many layouts (`2020.01.01`, `2020-01-01`,
//! `2020-01-01T09:30:00Z`, ...). [`parse_joined`] tries each supported layout in turn and
//! returns a naive timestamp; timestamps carrying an offset are converted to UTC first.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{DirectoryError, DirectoryResult};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d"];

/// Parse free-form date text into a [`NaiveDateTime`].
///
/// Plain dates resolve to midnight. Unparseable input yields [`DirectoryError::Date`], which is
/// an unclassified failure.
pub fn parse_joined(raw: &str) -> DirectoryResult<NaiveDateTime> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(ndt);
        }
    }

    // "2020.01.01." is a common way of writing dates in some locales.
    let date_part = s.strip_suffix('.').unwrap_or(s);
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, fmt) {
            if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
                return Ok(midnight);
            }
        }
    }

    Err(DirectoryError::Date {
        raw: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::parse_joined;
    use crate::error::{DirectoryError, ErrorCode};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_dotted_dashed_and_slashed_dates() {
        assert_eq!(parse_joined("2020.01.01").unwrap(), ymd(2020, 1, 1));
        assert_eq!(parse_joined("2016-02-06").unwrap(), ymd(2016, 2, 6));
        assert_eq!(parse_joined("2018/07/02").unwrap(), ymd(2018, 7, 2));
        assert_eq!(parse_joined(" 2020.03.27 ").unwrap(), ymd(2020, 3, 27));
        assert_eq!(parse_joined("2020.03.27.").unwrap(), ymd(2020, 3, 27));
    }

    #[test]
    fn parses_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2019, 12, 5)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        assert_eq!(parse_joined("2019-12-05T09:30:00").unwrap(), expected);
        assert_eq!(parse_joined("2019-12-05 09:30:00").unwrap(), expected);
        assert_eq!(parse_joined("2019-12-05T09:30:00Z").unwrap(), expected);
        assert_eq!(parse_joined("2019-12-05T18:30:00+09:00").unwrap(), expected);
    }

    #[test]
    fn unparseable_date_is_unclassified() {
        let err = parse_joined("not a date").unwrap_err();
        assert!(matches!(err, DirectoryError::Date { ref raw } if raw == "not a date"));
        assert_eq!(err.code(), ErrorCode::Unknown);

        assert!(parse_joined("").is_err());
        assert!(parse_joined("2020.13.01").is_err());
    }
}
