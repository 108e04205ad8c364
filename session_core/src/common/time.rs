use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, ParseResult, Weekday};

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const DATE_TAG_FORMAT: &str = "%Y%m%d";

/// Midnight of `date` shifted by a signed number of hours.
///
/// No clamping: the result lands on the previous or next calendar day when
/// `hours` is negative or >= 24.
pub fn at_hour(date: NaiveDate, hours: i32) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(hours))
}

/// Saturday and Sunday carry no session
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

pub fn to_date_str(date: NaiveDate) -> String {
    date.format(DATE_TAG_FORMAT).to_string()
}

/// Supports "YYYY-MM-DD HH:MM:SS" or "YYYYMMDD"
pub fn parse_time(time_str: &str) -> ParseResult<NaiveDateTime> {
    if time_str.contains('-') {
        NaiveDateTime::parse_from_str(time_str, TIME_FORMAT)
    } else {
        NaiveDate::parse_from_str(time_str, DATE_TAG_FORMAT).map(|d| d.and_time(NaiveTime::MIN))
    }
}
