use super::{
    add_reminder::AddReminderUseCase, get_reminders::GetRemindersUseCase,
    remove_reminder::RemoveReminderUseCase,
};
use crate::shared::usecase::execute;
use health_reminders_domain::{Reminder, ID};
use health_reminders_infra::{ReminderContext, ReminderStoreEvent};
use tokio::sync::broadcast;

/// In memory, insertion ordered collection of `Reminder`s.
///
/// Adding a reminder schedules its notification and removing one cancels it.
/// Neither reports failures: those are logged where they happen.
#[derive(Clone)]
pub struct ReminderStore {
    ctx: ReminderContext,
}

impl ReminderStore {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    pub async fn add(&self, reminder: Reminder) {
        let _ = execute(AddReminderUseCase { reminder }, &self.ctx).await;
    }

    pub async fn remove(&self, reminder_id: &ID) {
        let usecase = RemoveReminderUseCase {
            reminder_id: reminder_id.clone(),
        };
        let _ = execute(usecase, &self.ctx).await;
    }

    /// A snapshot of the stored reminders in the order they were added
    pub async fn list(&self) -> Vec<Reminder> {
        match execute(GetRemindersUseCase, &self.ctx).await {
            Ok(reminders) => reminders,
            Err(e) => match e {},
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReminderStoreEvent> {
        self.ctx.events.subscribe()
    }
}
