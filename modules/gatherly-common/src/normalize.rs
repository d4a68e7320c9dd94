//! Pure normalization helpers for event and booking input. No I/O;
//! writers call these before anything touches the store.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::error::GatherlyError;

/// Create a URL-friendly slug from a title: lowercased, every run of
/// non-alphanumeric characters collapsed to a single `-`, no leading
/// or trailing dash. Total — whitespace-only input yields `""`, which
/// writers reject upstream as a missing title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for c in title.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Normalize a date string to the ISO calendar date `YYYY-MM-DD`.
///
/// Inputs with an explicit UTC offset are converted to UTC and the UTC
/// calendar day is kept. Bare dates are taken verbatim — the ambient
/// local timezone is never consulted, so the result is the same in
/// every environment.
pub fn normalize_date(input: &str) -> Result<String, GatherlyError> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc).format("%Y-%m-%d").to_string());
    }

    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.format("%Y-%m-%d").to_string());
        }
    }

    Err(GatherlyError::InvalidDateFormat(input.to_string()))
}

/// Normalize a time string to 24-hour `HH:mm`. Accepts `H:MM` and
/// `HH:MM` with an optional AM/PM suffix (any case, optional space).
/// 12 AM maps to hour 00, 12 PM stays 12, 1-11 PM gain 12.
pub fn normalize_time(input: &str) -> Result<String, GatherlyError> {
    let s = input.trim();
    let re = Regex::new(r"^([0-9]{1,2}):([0-9]{2})\s*([AaPp][Mm])?$").expect("valid regex");

    let caps = re
        .captures(s)
        .ok_or_else(|| GatherlyError::InvalidTimeFormat(input.to_string()))?;

    let mut hour: u32 = caps[1].parse().expect("digits per regex");
    let minute: u32 = caps[2].parse().expect("digits per regex");
    if minute > 59 {
        return Err(GatherlyError::InvalidTimeFormat(input.to_string()));
    }

    if let Some(suffix) = caps.get(3) {
        let is_pm = suffix.as_str().eq_ignore_ascii_case("pm");
        if hour == 12 {
            hour = if is_pm { 12 } else { 0 };
        } else if is_pm {
            hour += 12;
        }
    }
    if hour > 23 {
        return Err(GatherlyError::InvalidTimeFormat(input.to_string()));
    }

    Ok(format!("{hour:02}:{minute:02}"))
}

/// Trim, lowercase and syntactically validate an email address.
/// Deliberately loose (`local@domain.tld` shape) — a full RFC 5322
/// grammar buys nothing at this layer.
pub fn normalize_email(input: &str) -> Result<String, GatherlyError> {
    let email = input.trim().to_ascii_lowercase();
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex");
    if re.is_match(&email) {
        Ok(email)
    } else {
        Err(GatherlyError::InvalidEmail(input.to_string()))
    }
}
