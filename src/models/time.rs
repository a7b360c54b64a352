//! Time-of-day codec.
//!
//! Converts between the textual `H:MM` form used at the roster boundary and
//! integer minutes since midnight used everywhere else.
//!
//! # Format
//! Hours carry no leading zero, minutes always carry two digits:
//! `"8:00"`, `"17:05"`. Parsing is slightly more lenient (`"08:00"` and
//! `"8:5"` are accepted) but formatting is canonical, so
//! `format_time(parse_time(s)?) == s` for every canonical `s`.

use crate::error::{BoardError, BoardResult};

/// Minutes since 00:00.
///
/// Committed values lie in `[0, 1440)`; drag arithmetic may briefly leave
/// that range before clamping.
pub type TimePoint = i32;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: TimePoint = 60;

/// Minutes in one day (exclusive upper bound of a committed time).
pub const MINUTES_PER_DAY: TimePoint = 24 * MINUTES_PER_HOUR;

/// Parses `H:MM` into minutes since midnight.
///
/// # Errors
/// [`BoardError::MalformedTime`] unless the text holds exactly one `:`,
/// both sides are plain decimal digits, hours are 0-23 and minutes 0-59.
pub fn parse_time(text: &str) -> BoardResult<TimePoint> {
    let malformed = || BoardError::MalformedTime {
        text: text.to_string(),
    };

    let (hours, minutes) = text.split_once(':').ok_or_else(malformed)?;
    if minutes.contains(':') {
        return Err(malformed());
    }

    let hours = parse_component(hours, 23).ok_or_else(malformed)?;
    let minutes = parse_component(minutes, 59).ok_or_else(malformed)?;
    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// Formats minutes since midnight as `H:MM`.
pub fn format_time(t: TimePoint) -> String {
    let hours = t.div_euclid(MINUTES_PER_HOUR);
    let minutes = t.rem_euclid(MINUTES_PER_HOUR);
    format!("{hours}:{minutes:02}")
}

fn parse_component(part: &str, max: TimePoint) -> Option<TimePoint> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<TimePoint>().ok().filter(|v| *v <= max)
}
