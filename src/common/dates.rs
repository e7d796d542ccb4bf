//! Date helpers for the timestamps the API speaks (ISO-8601 strings) and the
//! values produced by `datetime-local` inputs.

use chrono::{NaiveDate, NaiveDateTime};

const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parses an API or input timestamp, tolerating missing seconds and
/// fractional seconds.
pub fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim_end_matches('Z');
    ISO_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// `datetime-local` inputs emit minute precision; the reservation API expects
/// seconds. Appends `:00` to a 16-character value, leaves anything else as-is.
pub fn normalize_datetime_local(value: &str) -> String {
    if value.len() == 16 {
        format!("{value}:00")
    } else {
        value.to_string()
    }
}

/// Truncates an ISO timestamp to the 16-character form a `datetime-local`
/// input accepts as its value.
pub fn to_input_value(value: &str) -> &str {
    if value.len() >= 16 { &value[..16] } else { value }
}

/// "dd/mm/aaaa hh:mm" display form; echoes the raw string back when it does
/// not parse.
pub fn format_br(value: &str) -> String {
    match parse_iso(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// "dd/mm/aaaa" display form.
pub fn format_br_date(value: &str) -> String {
    match parse_iso(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Whether an ISO timestamp falls on the given calendar day.
pub fn is_on_day(value: &str, day: NaiveDate) -> bool {
    parse_iso(value).is_some_and(|dt| dt.date() == day)
}
