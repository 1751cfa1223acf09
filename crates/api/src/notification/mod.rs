pub mod cancel_notification;
mod scheduler;
pub mod schedule_notification;

pub use schedule_notification::{build_notification_request, ScheduleError};
pub use scheduler::NotificationScheduler;
