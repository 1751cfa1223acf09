use super::{
    cancel_notification::CancelNotificationUseCase,
    schedule_notification::{ScheduleError, ScheduleNotificationUseCase},
};
use crate::shared::usecase::execute;
use health_reminders_domain::{NotificationRequest, Reminder, ID};
use health_reminders_infra::ReminderContext;

/// Turns `Reminder`s into notifications scheduled with the notification center
#[derive(Clone)]
pub struct NotificationScheduler {
    ctx: ReminderContext,
}

impl NotificationScheduler {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    /// Errors are already logged when this returns, callers are free to ignore them
    pub async fn schedule(&self, reminder: &Reminder) -> Result<NotificationRequest, ScheduleError> {
        let usecase = ScheduleNotificationUseCase {
            reminder: reminder.clone(),
        };
        execute(usecase, &self.ctx).await
    }

    pub async fn cancel(&self, reminder_id: &ID) {
        let usecase = CancelNotificationUseCase {
            reminder_id: reminder_id.clone(),
        };
        match execute(usecase, &self.ctx).await {
            Ok(()) => (),
            Err(e) => match e {},
        }
    }
}
