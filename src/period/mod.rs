use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month, OffsetDateTime, Time};

use crate::domain::Incident;
use crate::normalize::dates::parse_date;

/// Named strategy for deriving the date-filter interval shared by every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodMode {
    Day,
    Week,
    Month,
    Custom,
    Manual,
    All,
}

/// Inclusive instant interval. Transient view state, shared across dependent
/// views so they stay mutually consistent; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodRange {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

fn start_of_day(dt: OffsetDateTime) -> OffsetDateTime {
    dt.replace_time(Time::MIDNIGHT)
}

fn end_of_day(dt: OffsetDateTime) -> OffsetDateTime {
    dt.replace_time(Time::MAX)
}

fn start_of_year(dt: OffsetDateTime) -> OffsetDateTime {
    let jan1 = dt
        .replace_day(1)
        .and_then(|d| d.replace_month(Month::January))
        .unwrap_or(dt);
    start_of_day(jan1)
}

/// Same day-of-month N months earlier, clamped to the target month's length.
fn shift_months_back(dt: OffsetDateTime, months: i32) -> OffsetDateTime {
    let mut year = dt.year();
    let mut month0 = i32::from(u8::from(dt.month())) - 1 - months;
    while month0 < 0 {
        month0 += 12;
        year -= 1;
    }
    let month = match Month::try_from((month0 + 1) as u8) {
        Ok(m) => m,
        Err(_) => return dt,
    };
    let day = dt.day().min(month.length(year));
    match Date::from_calendar_date(year, month, day) {
        Ok(date) => dt.replace_date(date),
        Err(_) => dt,
    }
}

/// Resolve a period mode into a concrete inclusive interval.
///
/// - `day` / `week` / `month`: the calendar unit containing `now`; weeks are
///   Monday-first (pt-BR convention).
/// - `custom`: parsed `manual_start` else `now` minus 12 months; parsed
///   `manual_end` else `now`.
/// - `manual`: parsed `manual_start` else Jan 1 of the current year; parsed
///   `manual_end` else `now`.
/// - `all`: earliest/latest parseable `opened` across `incidents`; rows whose
///   `opened` does not parse are skipped from the boundary computation only.
///   Both bounds collapse to `now` when nothing parses.
pub fn resolve_period(
    mode: PeriodMode,
    now: OffsetDateTime,
    manual_start: Option<&str>,
    manual_end: Option<&str>,
    incidents: &[Incident],
) -> PeriodRange {
    match mode {
        PeriodMode::Day => PeriodRange {
            start: start_of_day(now),
            end: end_of_day(now),
        },
        PeriodMode::Week => {
            let back = i64::from(now.weekday().number_days_from_monday());
            let start = start_of_day(now - Duration::days(back));
            PeriodRange {
                start,
                end: end_of_day(start + Duration::days(6)),
            }
        }
        PeriodMode::Month => {
            let first = now.replace_day(1).unwrap_or(now);
            let last = now
                .replace_day(now.month().length(now.year()))
                .unwrap_or(now);
            PeriodRange {
                start: start_of_day(first),
                end: end_of_day(last),
            }
        }
        PeriodMode::Custom => PeriodRange {
            start: manual_start
                .and_then(parse_date)
                .unwrap_or_else(|| shift_months_back(now, 12)),
            end: manual_end.and_then(parse_date).unwrap_or(now),
        },
        PeriodMode::Manual => PeriodRange {
            start: manual_start
                .and_then(parse_date)
                .unwrap_or_else(|| start_of_year(now)),
            end: manual_end.and_then(parse_date).unwrap_or(now),
        },
        PeriodMode::All => {
            let mut bounds: Option<(OffsetDateTime, OffsetDateTime)> = None;
            for opened in incidents.iter().filter_map(|inc| parse_date(&inc.opened)) {
                bounds = Some(match bounds {
                    None => (opened, opened),
                    Some((min, max)) => (min.min(opened), max.max(opened)),
                });
            }
            let (start, end) = bounds.unwrap_or((now, now));
            PeriodRange { start, end }
        }
    }
}

/// Filter incidents by `opened` against a resolved range.
///
/// `all` mode passes everything through unfiltered. In every other mode an
/// incident whose `opened` fails to parse is included, not excluded: absence
/// of a valid date is never grounds for hiding a record from counts.
pub fn filter_incidents_by_period(
    incidents: &[Incident],
    mode: PeriodMode,
    range: &PeriodRange,
) -> Vec<Incident> {
    if mode == PeriodMode::All {
        return incidents.to_vec();
    }
    incidents
        .iter()
        .filter(|inc| match parse_date(&inc.opened) {
            Some(opened) => opened >= range.start && opened <= range.end,
            None => true,
        })
        .cloned()
        .collect()
}
