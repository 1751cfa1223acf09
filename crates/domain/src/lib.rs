mod appointment;
mod date;
mod health_alert;
mod notification;
mod reminder;
mod sample_data;
mod shared;

pub use appointment::{Appointment, AppointmentBooking, BookingValidationError};
pub use date::{format_appointment_date, next_daily_occurrence, resolve_local_datetime};
pub use health_alert::{search_health_alerts, HealthAlert};
pub use notification::{
    AuthorizationOption, AuthorizationStatus, DateComponents, DeliveredNotification,
    NotificationContent, NotificationRequest, NotificationSound, NotificationTrigger,
};
pub use reminder::{appointment_reminder_time, Reminder, ReminderKind, TriggerTime};
pub use sample_data::{SampleAppointment, SampleData, SampleMedicine};
pub use shared::entity::{Entity, InvalidIDError, ID};
