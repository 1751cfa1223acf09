use health_reminders_domain::{Reminder, ID};
use tokio::sync::broadcast;

/// Change made to the reminder store, published to whoever renders it
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderStoreEvent {
    Added(Reminder),
    Removed(ID),
}

#[derive(Clone)]
pub struct ReminderEvents {
    sender: broadcast::Sender<ReminderStoreEvent>,
}

impl ReminderEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Having no subscribers is not an error, the event is simply dropped
    pub fn publish(&self, event: ReminderStoreEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ReminderStoreEvent> {
        self.sender.subscribe()
    }
}

impl Default for ReminderEvents {
    fn default() -> Self {
        Self::new(64)
    }
}
