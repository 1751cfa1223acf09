use health_reminders_domain::DeliveredNotification;
use health_reminders_infra::ReminderContext;
use std::time::Duration;
use tokio::{task::JoinHandle, time::interval};
use tracing::info;

/// Hands out every notification that is due and logs it
pub async fn deliver_notifications(ctx: &ReminderContext) -> Vec<DeliveredNotification> {
    let now = ctx.sys.now();
    let delivered = ctx.notifications.deliver_due(now).await;
    for notification in &delivered {
        info!(
            "Delivered notification {} at {}: {} - {}",
            notification.identifier,
            notification.delivered_at,
            notification.content.title,
            notification.content.body
        );
    }
    delivered
}

pub fn start_delivery_job(ctx: ReminderContext) -> JoinHandle<()> {
    tokio::spawn(async move {
        let period = Duration::from_secs(ctx.config.delivery_interval_secs.max(1));
        let mut delivery_interval = interval(period);
        loop {
            delivery_interval.tick().await;
            deliver_notifications(&ctx).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::ReminderStore;
    use chrono::{prelude::*, Duration};
    use health_reminders_domain::Reminder;
    use health_reminders_infra::StaticTimeSys;
    use std::sync::Arc;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 5, hour, minute, 0).unwrap()
    }

    #[tokio::test]
    async fn delivers_due_notifications() {
        let mut ctx = ReminderContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys(at(8, 0).timestamp_millis()));
        ctx.notifications.request_authorization(&[]).await.unwrap();
        let store = ReminderStore::new(ctx.clone());
        store.add(Reminder::medicine("Aspirin", at(9, 0))).await;

        assert!(deliver_notifications(&ctx).await.is_empty());

        ctx.sys = Arc::new(StaticTimeSys(at(9, 0).timestamp_millis()));
        let delivered = deliver_notifications(&ctx).await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].content.title, "Medicine Reminder");

        // Fires again the day after
        ctx.sys = Arc::new(StaticTimeSys(
            (at(9, 0) + Duration::days(1)).timestamp_millis(),
        ));
        assert_eq!(deliver_notifications(&ctx).await.len(), 1);
    }
}
