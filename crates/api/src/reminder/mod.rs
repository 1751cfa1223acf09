pub mod add_reminder;
pub mod get_reminders;
pub mod remove_reminder;
mod store;
mod subscribers;

pub use store::ReminderStore;
