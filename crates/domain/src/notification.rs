use crate::date::{next_daily_occurrence, resolve_local_datetime};
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Calendar fields a `NotificationTrigger::Calendar` matches against.
/// Leaving out the date fields makes the trigger match every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateComponents {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: u32,
    pub minute: u32,
}

impl DateComponents {
    pub fn hour_and_minute(date: &DateTime<Tz>) -> Self {
        Self {
            year: None,
            month: None,
            day: None,
            hour: date.hour(),
            minute: date.minute(),
        }
    }

    pub fn full(date: &DateTime<Tz>) -> Self {
        Self {
            year: Some(date.year()),
            month: Some(date.month()),
            day: Some(date.day()),
            hour: date.hour(),
            minute: date.minute(),
        }
    }

    pub fn has_date(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationTrigger {
    /// Fires when the wall clock matches `date_matching`
    Calendar {
        date_matching: DateComponents,
        repeats: bool,
    },
    /// Fires `seconds` after the request was submitted
    TimeInterval { seconds: i64, repeats: bool },
}

impl NotificationTrigger {
    pub fn repeats(&self) -> bool {
        match self {
            Self::Calendar { repeats, .. } => *repeats,
            Self::TimeInterval { repeats, .. } => *repeats,
        }
    }

    /// The first instant this trigger fires at when submitted at `submitted_at`.
    /// A full calendar date in the past is returned as is.
    pub fn first_fire(&self, submitted_at: DateTime<Utc>, tz: &Tz) -> Option<DateTime<Utc>> {
        match self {
            Self::Calendar { date_matching, .. } => match (
                date_matching.year,
                date_matching.month,
                date_matching.day,
            ) {
                (Some(year), Some(month), Some(day)) => resolve_local_datetime(
                    tz,
                    year,
                    month,
                    day,
                    date_matching.hour,
                    date_matching.minute,
                ),
                _ => next_daily_occurrence(
                    date_matching.hour,
                    date_matching.minute,
                    submitted_at,
                    tz,
                ),
            },
            Self::TimeInterval { seconds, .. } => {
                submitted_at.checked_add_signed(Duration::try_seconds(*seconds)?)
            }
        }
    }

    /// The instant a repeating trigger fires at after having fired at
    /// `fired_at`, skipping occurrences that are not after `now`.
    /// One-shot triggers never fire again.
    pub fn next_fire(
        &self,
        fired_at: DateTime<Utc>,
        now: DateTime<Utc>,
        tz: &Tz,
    ) -> Option<DateTime<Utc>> {
        if !self.repeats() {
            return None;
        }
        match self {
            Self::Calendar { date_matching, .. } => {
                let after = if fired_at > now { fired_at } else { now };
                next_daily_occurrence(date_matching.hour, date_matching.minute, after, tz)
            }
            Self::TimeInterval { seconds, .. } => {
                if *seconds <= 0 {
                    return None;
                }
                let interval = Duration::try_seconds(*seconds)?;
                let mut next = fired_at.checked_add_signed(interval)?;
                if next <= now {
                    let behind = (now - next).num_seconds() / seconds + 1;
                    let catch_up = behind.checked_mul(*seconds).and_then(Duration::try_seconds)?;
                    next = next.checked_add_signed(catch_up)?;
                }
                Some(next)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationSound {
    Default,
    Silent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub sound: NotificationSound,
}

/// A request handed to the platform notification center. The `identifier`
/// is the key used for replacing and cancelling pending requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub identifier: String,
    pub content: NotificationContent,
    pub trigger: NotificationTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationOption {
    Alert,
    Sound,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthorizationStatus {
    NotDetermined,
    Authorized,
    Denied,
}

impl AuthorizationStatus {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredNotification {
    pub identifier: String,
    pub content: NotificationContent,
    pub delivered_at: DateTime<Utc>,
}
