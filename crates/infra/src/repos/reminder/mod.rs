mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use health_reminders_domain::{Reminder, ID};

/// Ordered storage of `Reminder`s. Iteration order is insertion order.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_all(&self) -> Vec<Reminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
}

#[cfg(test)]
mod tests {
    use crate::ReminderContext;
    use chrono::prelude::*;
    use health_reminders_domain::{Reminder, ID};

    fn medicine(name: &str) -> Reminder {
        Reminder::medicine(name, Utc.with_ymd_and_hms(2023, 10, 5, 9, 0, 0).unwrap())
    }

    #[tokio::test]
    async fn keeps_insertion_order() {
        let ctx = ReminderContext::create_inmemory();
        for name in ["Aspirin", "Metformin", "Lisinopril"].iter() {
            ctx.repos.reminders.insert(&medicine(name)).await.unwrap();
        }

        let labels = ctx
            .repos
            .reminders
            .find_all()
            .await
            .into_iter()
            .map(|r| r.label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["Aspirin", "Metformin", "Lisinopril"]);
    }

    #[tokio::test]
    async fn finds_and_deletes_by_id() {
        let ctx = ReminderContext::create_inmemory();
        let aspirin = medicine("Aspirin");
        let metformin = medicine("Metformin");
        ctx.repos.reminders.insert(&aspirin).await.unwrap();
        ctx.repos.reminders.insert(&metformin).await.unwrap();

        assert_eq!(ctx.repos.reminders.find(&aspirin.id).await, Some(aspirin.clone()));

        let deleted = ctx.repos.reminders.delete(&aspirin.id).await;
        assert_eq!(deleted, Some(aspirin.clone()));
        assert!(ctx.repos.reminders.find(&aspirin.id).await.is_none());
        assert_eq!(ctx.repos.reminders.find_all().await, vec![metformin]);
    }

    #[tokio::test]
    async fn deleting_unknown_id_is_a_noop() {
        let ctx = ReminderContext::create_inmemory();
        ctx.repos.reminders.insert(&medicine("Aspirin")).await.unwrap();

        assert!(ctx.repos.reminders.delete(&ID::new()).await.is_none());
        assert_eq!(ctx.repos.reminders.find_all().await.len(), 1);
    }
}
