use crate::shared::usecase::UseCase;
use health_reminders_domain::ID;
use health_reminders_infra::ReminderContext;

/// Cancels the pending notification of a `Reminder`. Cancelling something
/// that was never scheduled, or that already fired, does nothing.
#[derive(Debug)]
pub struct CancelNotificationUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for CancelNotificationUseCase {
    type Response = ();

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        ctx.notifications
            .remove_pending(&[self.reminder_id.as_string()])
            .await;
        Ok(())
    }
}
