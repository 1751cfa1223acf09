use crate::notification::cancel_notification::CancelNotificationUseCase;
use crate::shared::usecase::{execute, UseCase};
use health_reminders_domain::{Reminder, ID};
use health_reminders_infra::{ReminderContext, ReminderStoreEvent};

/// Removes a `Reminder` from the store and cancels its notification.
/// Removing an unknown id is not an error.
#[derive(Debug)]
pub struct RemoveReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for RemoveReminderUseCase {
    type Response = Option<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let removed = ctx.repos.reminders.delete(&self.reminder_id).await;
        if removed.is_some() {
            ctx.events
                .publish(ReminderStoreEvent::Removed(self.reminder_id.clone()));
        }

        // Cancellation is attempted whether or not the reminder was stored
        let cancel_notification = CancelNotificationUseCase {
            reminder_id: self.reminder_id.clone(),
        };
        // Sideeffect, ignore result
        let _ = execute(cancel_notification, ctx).await;

        Ok(removed)
    }
}
