use crate::{
    error::ReminderError,
    reminder::add_reminder::AddReminderUseCase,
    shared::usecase::{execute, UseCase},
};
use chrono::Duration;
use health_reminders_domain::{Reminder, ID};
use health_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseErrors) -> ReminderError {
    match e {
        UseCaseErrors::NotFound(alert_id) => ReminderError::NotFound(format!(
            "The health alert with id: {}, was not found.",
            alert_id
        )),
        UseCaseErrors::DelayOutOfRange(_) | UseCaseErrors::StorageError => {
            ReminderError::InternalError
        }
    }
}

/// The "Remind Me" action of a health alert
pub async fn remind_about_health_alert(
    alert_id: &ID,
    ctx: &ReminderContext,
) -> Result<Reminder, ReminderError> {
    let usecase = RemindAboutHealthAlertUseCase {
        alert_id: alert_id.clone(),
    };

    execute(usecase, ctx).await.map_err(handle_error)
}

#[derive(Debug)]
pub struct RemindAboutHealthAlertUseCase {
    pub alert_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    /// The configured delay is not a representable duration
    DelayOutOfRange(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for RemindAboutHealthAlertUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let alert = ctx
            .sample_data
            .health_alerts
            .iter()
            .find(|alert| alert.id == self.alert_id)
            .ok_or_else(|| UseCaseErrors::NotFound(self.alert_id.clone()))?;

        let delay_secs = ctx.config.health_alert_delay_secs;
        let delay = Duration::try_seconds(delay_secs)
            .ok_or(UseCaseErrors::DelayOutOfRange(delay_secs))?;
        let add_reminder = AddReminderUseCase {
            reminder: Reminder::health_alert(alert, delay),
        };
        execute(add_reminder, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::prelude::*;
    use chrono_tz::Tz;
    use health_reminders_domain::{NotificationTrigger, TriggerTime};
    use health_reminders_infra::{
        Config, INotificationCenter, InMemoryNotificationCenter, StaticTimeSys,
    };
    use health_reminders_domain::SampleData;
    use std::sync::Arc;

    #[tokio::test]
    async fn schedules_reminder_after_configured_delay() {
        let mut ctx = ReminderContext::create_inmemory();
        let now = Utc.with_ymd_and_hms(2023, 10, 5, 8, 0, 0).unwrap();
        ctx.sys = Arc::new(StaticTimeSys(now.timestamp_millis()));
        let center = Arc::new(InMemoryNotificationCenter::new(Tz::UTC, true));
        center.request_authorization(&[]).await.unwrap();
        ctx.notifications = center.clone();
        let alert = ctx.sample_data.health_alerts[1].clone();

        let reminder = remind_about_health_alert(&alert.id, &ctx).await.unwrap();

        assert_eq!(reminder.label, "COVID-19");
        assert_eq!(reminder.trigger, TriggerTime::After(Duration::seconds(10)));
        let pending = center.pending_requests().await;
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].content.title, "Health Alert: COVID-19");
        assert_eq!(
            pending[0].trigger,
            NotificationTrigger::TimeInterval {
                seconds: 10,
                repeats: false
            }
        );

        assert!(center.deliver_due(now + Duration::seconds(9)).await.is_empty());
        assert_eq!(center.deliver_due(now + Duration::seconds(10)).await.len(), 1);
    }

    #[tokio::test]
    async fn tapping_twice_creates_two_reminders() {
        let ctx = ReminderContext::create_inmemory();
        let alert = ctx.sample_data.health_alerts[0].clone();

        let first = remind_about_health_alert(&alert.id, &ctx).await.unwrap();
        let second = remind_about_health_alert(&alert.id, &ctx).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(ctx.repos.reminders.find_all().await.len(), 2);
    }

    #[tokio::test]
    async fn unknown_alert_is_not_found() {
        let ctx = ReminderContext::create_inmemory();

        let res = remind_about_health_alert(&ID::new(), &ctx).await;

        assert!(matches!(res, Err(ReminderError::NotFound(_))));
        assert!(ctx.repos.reminders.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn delay_out_of_range_is_an_internal_error() {
        let config = Config {
            health_alert_delay_secs: i64::MAX,
            ..Default::default()
        };
        let ctx = ReminderContext::create(config, SampleData::default());
        let alert = ctx.sample_data.health_alerts[0].clone();

        let res = remind_about_health_alert(&alert.id, &ctx).await;

        assert_eq!(res, Err(ReminderError::InternalError));
        assert!(ctx.repos.reminders.find_all().await.is_empty());
    }
}
