//! Time utilities: parsing command-line timestamps, formatting instants and durations.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, Local, NaiveDateTime};
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

static RELATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)now\s*([+-])\s*(\d+)\s*([dhm])$").expect("valid relative time pattern")
});

/// Parse a timestamp relative to the current instant.
pub fn parse_datetime(s: &str) -> AppResult<DateTime<Local>> {
    parse_datetime_at(s, Local::now())
}

/// Parse a timestamp. Accepted forms:
/// - RFC 3339 (`2025-09-01T09:00:00+02:00`)
/// - local `YYYY-MM-DD HH:MM` / `YYYY-MM-DDTHH:MM` (seconds optional)
/// - `now`, `now+2h`, `now-30m`, `now+1d`
pub fn parse_datetime_at(s: &str, now: DateTime<Local>) -> AppResult<DateTime<Local>> {
    let input = s.trim();

    if let Some(dt) = parse_relative(input, now)? {
        return Ok(dt);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
            return naive
                .and_local_timezone(Local)
                .earliest()
                .ok_or_else(|| AppError::InvalidDateTime(input.to_string()));
        }
    }

    Err(AppError::InvalidDateTime(input.to_string()))
}

/// `Ok(None)` when `input` is not a relative form; an offset that overflows
/// the calendar is an error.
fn parse_relative(input: &str, now: DateTime<Local>) -> AppResult<Option<DateTime<Local>>> {
    if input.eq_ignore_ascii_case("now") {
        return Ok(Some(now));
    }

    let Some(caps) = RELATIVE_RE.captures(input) else {
        return Ok(None);
    };

    let out_of_range = || AppError::InvalidDateTime(input.to_string());

    let amount: i64 = caps[2].parse().map_err(|_| out_of_range())?;
    let offset = match caps[3].to_ascii_lowercase().as_str() {
        "d" => Duration::try_days(amount),
        "h" => Duration::try_hours(amount),
        _ => Duration::try_minutes(amount),
    }
    .ok_or_else(out_of_range)?;

    let shifted = if &caps[1] == "-" {
        now.checked_sub_signed(offset)
    } else {
        now.checked_add_signed(offset)
    };
    shifted.map(Some).ok_or_else(out_of_range)
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<DateTime<Local>>> {
    input.map(|s| parse_datetime(s)).transpose()
}

/// Format with a strftime pattern; an invalid pattern falls back to RFC 3339.
pub fn format_datetime(dt: &DateTime<Local>, fmt: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", dt.format(fmt)) {
        Ok(()) => out,
        Err(_) => dt.to_rfc3339(),
    }
}

pub fn format_optional(dt: Option<&DateTime<Local>>, fmt: &str) -> String {
    dt.map(|d| format_datetime(d, fmt))
        .unwrap_or_else(|| "--".to_string())
}

/// Minutes as `HHh MMm`.
pub fn mins2readable(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
