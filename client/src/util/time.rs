//! Timestamp helpers.
//!
//! The backend emits ISO-8601 strings; the UI only needs the current time in
//! the same form and short date/time renderings of those strings.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time as an ISO-8601 UTC string.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// `YYYY-MM-DD` part of an ISO timestamp.
pub fn format_date(iso: &str) -> String {
    match iso.get(..10) {
        Some(date) if looks_like_date(date) => date.to_owned(),
        _ => iso.to_owned(),
    }
}

/// `YYYY-MM-DD HH:MM` rendering of an ISO timestamp.
pub fn format_datetime(iso: &str) -> String {
    let date = format_date(iso);
    match iso.get(11..16) {
        Some(clock) if iso.as_bytes().get(10) == Some(&b'T') || iso.as_bytes().get(10) == Some(&b' ') => {
            format!("{date} {clock}")
        }
        _ => date,
    }
}

/// Optional timestamp rendered as a date, or `fallback`.
pub fn date_or(iso: Option<&str>, fallback: &str) -> String {
    iso.map_or_else(|| fallback.to_owned(), format_date)
}

/// Value of an `<input type="datetime-local">` (`YYYY-MM-DDTHH:MM`) as a
/// full ISO timestamp with seconds. Empty input stays empty.
pub fn local_input_to_iso(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() == 16 { format!("{raw}:00") } else { raw.to_owned() }
}

fn looks_like_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
