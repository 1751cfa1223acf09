use super::add_reminder::AddReminderUseCase;
use crate::notification::schedule_notification::ScheduleNotificationUseCase;
use crate::shared::usecase::{execute, Subscriber};
use health_reminders_domain::Reminder;
use health_reminders_infra::ReminderContext;

pub struct ScheduleNotificationOnReminderAdded;

#[async_trait::async_trait(?Send)]
impl Subscriber<AddReminderUseCase> for ScheduleNotificationOnReminderAdded {
    async fn notify(&self, e: &Reminder, ctx: &ReminderContext) {
        let schedule_notification = ScheduleNotificationUseCase {
            reminder: e.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(schedule_notification, ctx).await;
    }
}
