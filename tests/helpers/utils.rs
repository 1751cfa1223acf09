use health_reminders_domain::{DateComponents, NotificationTrigger};

pub fn daily_trigger(hour: u32, minute: u32) -> NotificationTrigger {
    NotificationTrigger::Calendar {
        date_matching: DateComponents {
            year: None,
            month: None,
            day: None,
            hour,
            minute,
        },
        repeats: true,
    }
}
