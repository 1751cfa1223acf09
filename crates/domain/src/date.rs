use chrono::{prelude::*, Duration};
use chrono_tz::Tz;

/// Renders an instant the way appointment confirmations and reminders show it,
/// e.g. `Oct 5, 2023 at 9:00 AM`.
pub fn format_appointment_date(date: &DateTime<Utc>, tz: &Tz) -> String {
    date.with_timezone(tz)
        .format("%b %-d, %Y at %-I:%M %p")
        .to_string()
}

/// Resolves a wall clock time in `tz` to an instant. Ambiguous times pick the
/// earliest instant and times that fall in a DST gap resolve to `None`.
pub fn resolve_local_datetime(
    tz: &Tz,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, 0)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// The first instant strictly after `after` whose wall clock time in `tz` is
/// `hour:minute`.
pub fn next_daily_occurrence(
    hour: u32,
    minute: u32,
    after: DateTime<Utc>,
    tz: &Tz,
) -> Option<DateTime<Utc>> {
    let local_date = after.with_timezone(tz).date_naive();
    // A day skipped by a DST gap is retried on the following day
    for days_ahead in 0..3 {
        let date = local_date.checked_add_signed(Duration::days(days_ahead))?;
        if let Some(candidate) = resolve_local_datetime(
            tz,
            date.year(),
            date.month(),
            date.day(),
            hour,
            minute,
        ) {
            if candidate > after {
                return Some(candidate);
            }
        }
    }
    None
}
