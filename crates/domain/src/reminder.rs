use crate::{
    appointment::Appointment,
    date::format_appointment_date,
    health_alert::HealthAlert,
    shared::entity::{Entity, ID},
};
use chrono::{prelude::*, Duration};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderKind {
    Medicine,
    Appointment,
    HealthAlert,
}

/// When a `Reminder` should fire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerTime {
    /// An absolute point in time
    At(DateTime<Utc>),
    /// An offset from the moment the reminder is scheduled
    After(Duration),
}

/// A `Reminder` is a future notification obligation: take a medicine,
/// attend an appointment or act on a health alert.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Also used as the identifier of the scheduled notification, so
    /// scheduling the same `Reminder` twice replaces the pending one
    pub id: ID,
    pub kind: ReminderKind,
    /// Medicine name, doctor name or health alert title
    pub label: String,
    /// Message body of the notification
    pub body_text: String,
    pub trigger: TriggerTime,
    /// Medicine reminders repeat daily at the same hour and minute,
    /// the other kinds fire once
    pub repeats: bool,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Appointment reminders fire one hour ahead of the appointment. When that
/// instant is not representable the appointment time itself is used.
pub fn appointment_reminder_time(appointment_at: DateTime<Utc>) -> DateTime<Utc> {
    appointment_at
        .checked_sub_signed(Duration::hours(1))
        .unwrap_or(appointment_at)
}

impl Reminder {
    pub fn medicine(name: &str, time: DateTime<Utc>) -> Self {
        Self {
            id: ID::new(),
            kind: ReminderKind::Medicine,
            label: name.to_string(),
            body_text: format!("It's time to take your medicine: {}", name),
            trigger: TriggerTime::At(time),
            repeats: true,
        }
    }

    pub fn appointment(appointment: &Appointment, tz: &Tz) -> Self {
        Self {
            id: appointment.id.clone(),
            kind: ReminderKind::Appointment,
            label: appointment.doctor_name.clone(),
            body_text: format!(
                "Your appointment with {} is on {}.",
                appointment.doctor_name,
                format_appointment_date(&appointment.date, tz)
            ),
            trigger: TriggerTime::At(appointment_reminder_time(appointment.date)),
            repeats: false,
        }
    }

    /// Every call gets a fresh id instead of the alert's, so reminding about
    /// the same alert twice schedules two notifications rather than replacing
    /// the pending one.
    pub fn health_alert(alert: &HealthAlert, delay: Duration) -> Self {
        Self {
            id: ID::new(),
            kind: ReminderKind::HealthAlert,
            label: alert.title.clone(),
            body_text: format!("Stay safe! {}", alert.prevention),
            trigger: TriggerTime::After(delay),
            repeats: false,
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            ReminderKind::Medicine => "Medicine Reminder".into(),
            ReminderKind::Appointment => "Upcoming Appointment Reminder".into(),
            ReminderKind::HealthAlert => format!("Health Alert: {}", self.label),
        }
    }
}
