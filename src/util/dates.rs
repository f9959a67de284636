//! Date-string helpers for the due-date field.
//!
//! Dates travel as zero-padded `YYYY-MM-DD` strings end to end (HTML date
//! input, JSON, backend `LocalDate`), so ordering two of them is a plain
//! lexicographic comparison. "Today" comes from the browser clock in local
//! time; the native stub returns an empty string.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

/// Today's local date as `YYYY-MM-DD`.
pub fn today_date_string() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            now.get_full_year(),
            now.get_month() + 1,
            now.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Whether `value` has the exact shape `\d{4}-\d{2}-\d{2}`.
pub fn is_valid_date_format(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Whether `value` is a well-formed date on or after today.
pub fn is_valid_future_date(value: &str) -> bool {
    is_valid_future_date_from(value, &today_date_string())
}

/// Pure core of [`is_valid_future_date`] with an explicit "today".
pub fn is_valid_future_date_from(value: &str, today: &str) -> bool {
    if !is_valid_date_format(value) {
        return false;
    }
    value >= today
}
