//! Meeting-moment parsing and phonetic time-code formatting.
//!
//! All functions here take explicit inputs (no system clock access) — the
//! caller provides the "now" anchor and the device's UTC offset, keeping
//! the computation testable and WASM-compatible. Adapters read
//! `chrono::Local` once and pass the values in.

use chrono::{Duration, NaiveDateTime, Timelike};

use crate::letter::letter_for;

/// Parse a `datetime-local` control value into a wall-clock moment.
///
/// Accepts `YYYY-MM-DDTHH:MM` and `YYYY-MM-DDTHH:MM:SS`. Anything else
/// yields `None` and the caller substitutes its "now" anchor — an
/// unparsable picker value is recoverable input, not an error.
///
/// # Examples
///
/// ```
/// use zulu_core::moment::parse_moment;
///
/// assert!(parse_moment("2026-03-16T14:30").is_some());
/// assert!(parse_moment("2026-03-16T14:30:45").is_some());
/// assert!(parse_moment("not a date").is_none());
/// ```
pub fn parse_moment(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// The default picker value: `now` rounded down to the current hour.
pub fn default_meeting_moment(now: NaiveDateTime) -> NaiveDateTime {
    now.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Format the phonetic time code for a selected zone.
///
/// The letter stands in for the hour; only the target zone's minute and
/// second components are spelled out. This is a compact code for reading a
/// time aloud against an already-fixed-hour display, not a general clock.
///
/// # Arguments
///
/// * `offset` — The user-selected zone offset in whole hours.
/// * `moment` — The meeting moment as local wall-clock time.
/// * `local_offset_minutes` — The device's UTC offset in minutes east of
///   UTC (the negation of JavaScript's `getTimezoneOffset()`).
///
/// # Returns
///
/// `"<letter><MM>:<SS>"`, e.g. `"Z05:09"`. An out-of-range `offset` uses
/// the sentinel letter but the minute/second computation proceeds
/// unaffected.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use zulu_core::moment::format_code;
///
/// let moment = NaiveDate::from_ymd_opt(2026, 3, 16)
///     .unwrap()
///     .and_hms_opt(10, 0, 0)
///     .unwrap();
/// // Device at UTC: 10:00 local is 10:00 UTC, so zone +5 reads 15:00:00.
/// assert_eq!(format_code(5, moment, 0), "E00:00");
/// ```
pub fn format_code(offset: i32, moment: NaiveDateTime, local_offset_minutes: i32) -> String {
    // Treat the moment's clock reading as local wall time and recover the
    // true UTC instant, then shift into the selected zone.
    let instant = moment - Duration::minutes(i64::from(local_offset_minutes));
    let target = instant + Duration::hours(i64::from(offset));
    format!(
        "{}{:02}:{:02}",
        letter_for(offset),
        target.minute(),
        target.second()
    )
}

/// `"HH:MM"` label for the local wall-clock moment, used in the note text.
pub fn local_label(moment: NaiveDateTime) -> String {
    format!("{:02}:{:02}", moment.hour(), moment.minute())
}

/// Round the device's UTC offset to the nearest whole hour.
///
/// Matches the browser widget's `-Math.round(getTimezoneOffset() / 60)`
/// exactly: JavaScript's `Math.round` sends half-ties toward positive
/// infinity on the negated-minutes value, so `UTC+5:30` rounds to `+5`
/// while `UTC-5:30` rounds to `-6`.
///
/// Computed once at startup by the adapter; never refreshed on a timer.
pub fn local_offset_hours(local_offset_minutes: i32) -> i32 {
    let js_minutes = -local_offset_minutes;
    -((js_minutes + 30).div_euclid(60))
}
