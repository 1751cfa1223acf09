use super::subscribers::ScheduleNotificationOnReminderAdded;
use crate::shared::usecase::{Subscriber, UseCase};
use health_reminders_domain::Reminder;
use health_reminders_infra::{ReminderContext, ReminderStoreEvent};

/// Appends a `Reminder` to the store. Its notification is scheduled by a
/// subscriber once it has been stored.
#[derive(Debug)]
pub struct AddReminderUseCase {
    pub reminder: Reminder,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for AddReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminders
            .insert(&self.reminder)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        ctx.events
            .publish(ReminderStoreEvent::Added(self.reminder.clone()));

        Ok(self.reminder.clone())
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(ScheduleNotificationOnReminderAdded)]
    }
}
