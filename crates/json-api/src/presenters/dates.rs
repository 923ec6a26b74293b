//! Dates shown to customers, in Vietnam time (UTC+7).

use jiff::{
    Timestamp,
    civil::{Date, Time},
    tz::{self, TimeZone},
};

/// Which end of a day a bare date stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DayBound {
    /// First instant of the day.
    Start,

    /// Last instant of the day.
    End,
}

pub(crate) fn vietnam() -> TimeZone {
    TimeZone::fixed(tz::offset(7))
}

/// `05/03/2024`
pub(crate) fn display_date(timestamp: Timestamp) -> String {
    timestamp.to_zoned(vietnam()).strftime("%d/%m/%Y").to_string()
}

/// `10:30:00 05/03/2024`
pub(crate) fn display_date_time(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(vietnam())
        .strftime("%H:%M:%S %d/%m/%Y")
        .to_string()
}

/// `10:30 05/03`
pub(crate) fn display_short_date_time(timestamp: Timestamp) -> String {
    timestamp.to_zoned(vietnam()).strftime("%H:%M %d/%m").to_string()
}

/// Parse a filter bound given either as an RFC 3339 timestamp or as a
/// `YYYY-MM-DD` date in Vietnam time. A bare date covers the whole day.
///
/// # Errors
///
/// Returns an error when the value is neither form.
pub(crate) fn parse_date_bound(value: &str, bound: DayBound) -> Result<Timestamp, jiff::Error> {
    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    let date: Date = value.parse()?;

    let time = match bound {
        DayBound::Start => Time::midnight(),
        DayBound::End => Time::MAX,
    };

    Ok(date.to_datetime(time).to_zoned(vietnam())?.timestamp())
}
