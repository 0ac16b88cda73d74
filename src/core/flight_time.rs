//! Fixed-format flight time parsing: `DD.MM.YY HH:MM`.
//!
//! The two-digit year always maps to `2000 + YY`. Instants are naive
//! wall-clock values, so no time zone or DST adjustment takes place.

use crate::domain::model::TicketRecord;
use crate::utils::error::{Result, TicketError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const CENTURY: i32 = 2000;

fn invalid(value: &str, reason: impl Into<String>) -> TicketError {
    TicketError::DateParseError {
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn parse_component(value: &str, name: &str, raw: &str) -> Result<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(value, format!("{} `{}` is not a number", name, raw)));
    }
    raw.parse::<u32>()
        .map_err(|_| invalid(value, format!("{} `{}` is out of range", name, raw)))
}

fn parse_date(value: &str, raw: &str) -> Result<NaiveDate> {
    let parts: Vec<&str> = raw.split('.').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(invalid(value, "date must be DD.MM.YY"));
    };

    if year.len() != 2 {
        return Err(invalid(value, "year must have exactly two digits"));
    }

    let day = parse_component(value, "day", day)?;
    let month = parse_component(value, "month", month)?;
    let year = parse_component(value, "year", year)?;

    NaiveDate::from_ymd_opt(CENTURY + year as i32, month, day)
        .ok_or_else(|| invalid(value, "no such calendar date"))
}

fn parse_time(value: &str, raw: &str) -> Result<NaiveTime> {
    let parts: Vec<&str> = raw.split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return Err(invalid(value, "time must be HH:MM"));
    };

    let hour = parse_component(value, "hour", hour)?;
    let minute = parse_component(value, "minute", minute)?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid(value, "no such time of day"))
}

/// Parses `"<date> <time>"`, e.g. `"01.06.24 14:30"`.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let (date, time) = value
        .trim()
        .split_once(' ')
        .ok_or_else(|| invalid(value, "expected a date and a time separated by a space"))?;

    let date = parse_date(value, date.trim())?;
    let time = parse_time(value, time.trim())?;
    Ok(NaiveDateTime::new(date, time))
}

/// Whole minutes from departure to arrival, truncated toward zero.
/// Negative when the arrival instant precedes the departure.
pub fn flight_minutes(departure: &str, arrival: &str) -> Result<i64> {
    let departure = parse_instant(departure)?;
    let arrival = parse_instant(arrival)?;
    Ok((arrival - departure).num_minutes())
}

pub fn ticket_flight_minutes(ticket: &TicketRecord) -> Result<i64> {
    flight_minutes(&ticket.departure(), &ticket.arrival())
}
