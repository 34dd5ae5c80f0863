use time::format_description;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Days between the spreadsheet epoch (1900 system, with its leap-year quirk)
/// and the Unix epoch.
const SPREADSHEET_EPOCH_OFFSET_DAYS: f64 = 25569.0;

// Deterministic allowlists only (no fuzzy parsing). Zone-less inputs are
// assumed UTC; a date without a time component lands at midnight.
const ISO_FORMATS: &[&str] = &[
    "[year]-[month]-[day] [hour]:[minute]:[second]",
    "[year]-[month]-[day] [hour]:[minute]",
    "[year]-[month]-[day]T[hour]:[minute]:[second]",
    "[year]-[month]-[day]T[hour]:[minute]",
    "[year]-[month]-[day]",
];

const US_FORMATS: &[&str] = &[
    "[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]:[second]",
    "[month padding:none]/[day padding:none]/[year] [hour padding:none]:[minute]",
    "[month padding:none]/[day padding:none]/[year]",
];

const TEXTUAL_FORMATS: &[&str] = &[
    "[month repr:short] [day padding:none], [year] [hour padding:none]:[minute]:[second]",
    "[month repr:short] [day padding:none], [year] [hour padding:none]:[minute]",
    "[month repr:short] [day padding:none], [year]",
];

const BR_DISPLAY_FORMAT: &str = "[day]/[month]/[year] [hour]:[minute]";

fn parse_with_formats(raw: &str, formats: &[&str]) -> Option<OffsetDateTime> {
    for fmt in formats {
        let Ok(items) = format_description::parse(fmt) else {
            continue;
        };
        if let Ok(pdt) = PrimitiveDateTime::parse(raw, &items) {
            return Some(pdt.assume_utc());
        }
        if let Ok(date) = Date::parse(raw, &items) {
            return Some(date.midnight().assume_utc());
        }
    }
    None
}

/// ^\d+\.?\d*$ — a serial day count, optionally with a fractional day.
fn is_serial_number(s: &str) -> bool {
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, c) in s.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if idx > 0 && !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Leading YYYY-MM-DD.
fn starts_with_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..10].iter().all(u8::is_ascii_digit)
}

/// Leading M/D/YYYY, one or two digits for month and day.
fn starts_with_us_date(s: &str) -> bool {
    let b = s.as_bytes();
    let mut i = 0;
    for expected in [2usize, 2] {
        let start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i - start == 0 || i - start > expected || i >= b.len() || b[i] != b'/' {
            return false;
        }
        i += 1;
    }
    let start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    i - start == 4
}

/// Three consecutive ASCII letters anywhere, the original's heuristic for a
/// textual month name.
fn has_month_token(s: &str) -> bool {
    let mut run = 0;
    for c in s.chars() {
        if c.is_ascii_alphabetic() {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn is_unix_timestamp(s: &str) -> bool {
    (10..=13).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn from_unix_millis(millis: i128) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
}

fn parse_generic(s: &str) -> Option<OffsetDateTime> {
    if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
        return Some(dt);
    }
    parse_with_formats(s, ISO_FORMATS)
        .or_else(|| parse_with_formats(s, US_FORMATS))
        .or_else(|| parse_with_formats(s, TEXTUAL_FORMATS))
}

/// Parse a heterogeneous date representation into a single comparable instant.
///
/// Precedence: spreadsheet serial number, ISO-ish, US-style, textual month,
/// Unix timestamp, generic fallback. Returns `None` on empty input or when no
/// branch produces a valid instant — callers must treat `None` as "unknown
/// date", not "invalid and excluded". Never panics.
pub fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if is_serial_number(s) {
        let serial: f64 = s.parse().ok()?;
        let millis = ((serial - SPREADSHEET_EPOCH_OFFSET_DAYS) * 86_400_000.0).trunc() as i128;
        return from_unix_millis(millis);
    }

    if starts_with_iso_date(s) {
        if let Ok(dt) = OffsetDateTime::parse(s, &Rfc3339) {
            return Some(dt);
        }
        return parse_with_formats(s, ISO_FORMATS);
    }

    if starts_with_us_date(s) {
        return parse_with_formats(s, US_FORMATS);
    }

    if has_month_token(s) {
        if let Some(dt) = parse_with_formats(s, TEXTUAL_FORMATS) {
            return Some(dt);
        }
    }

    // Pure digit strings never reach here (the serial branch wins); this only
    // sees them after a failed fractional parse, which cannot happen for
    // 10-13 digit integers. Kept so the fallback chain stays explicit.
    if is_unix_timestamp(s) {
        let ts: i64 = s.parse().ok()?;
        let millis = if s.len() == 10 {
            ts as i128 * 1000
        } else {
            ts as i128
        };
        return from_unix_millis(millis);
    }

    parse_generic(s)
}

/// Format a raw date string for pt-BR display: `DD/MM/YYYY HH:MM`, `-` for
/// empty input, `Data inválida` when nothing parses.
pub fn format_date_br(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".to_string();
    }
    let Some(dt) = parse_date(raw) else {
        return "Data inválida".to_string();
    };
    let Ok(items) = format_description::parse(BR_DISPLAY_FORMAT) else {
        return "Data inválida".to_string();
    };
    match dt.format(&items) {
        Ok(s) => s,
        Err(_) => "Data inválida".to_string(),
    }
}

/// Same as [`format_date_br`] but empty on missing/unparseable input, for CSV
/// export cells.
pub fn format_date_for_csv(raw: &str) -> String {
    if raw.trim().is_empty() || parse_date(raw).is_none() {
        return String::new();
    }
    format_date_br(raw)
}
