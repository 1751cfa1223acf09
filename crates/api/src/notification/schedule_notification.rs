use crate::shared::usecase::UseCase;
use chrono_tz::Tz;
use health_reminders_domain::{
    AuthorizationStatus, DateComponents, NotificationContent, NotificationRequest,
    NotificationSound, NotificationTrigger, Reminder, TriggerTime,
};
use health_reminders_infra::ReminderContext;
use thiserror::Error;

/// Maps a `Reminder` to the request handed to the notification center.
///
/// Repeating reminders only keep the hour and minute of their trigger time,
/// which makes them fire every day. One-shot reminders keep the full date.
pub fn build_notification_request(reminder: &Reminder, tz: &Tz) -> NotificationRequest {
    let trigger = match &reminder.trigger {
        TriggerTime::At(at) => {
            let local = at.with_timezone(tz);
            let date_matching = if reminder.repeats {
                DateComponents::hour_and_minute(&local)
            } else {
                DateComponents::full(&local)
            };
            NotificationTrigger::Calendar {
                date_matching,
                repeats: reminder.repeats,
            }
        }
        TriggerTime::After(delay) => NotificationTrigger::TimeInterval {
            seconds: delay.num_seconds(),
            repeats: reminder.repeats,
        },
    };

    NotificationRequest {
        identifier: reminder.id.as_string(),
        content: NotificationContent {
            title: reminder.title(),
            body: reminder.body_text.clone(),
            sound: NotificationSound::Default,
        },
        trigger,
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    /// The request was submitted but will never be delivered
    #[error("Notifications are not authorized")]
    PermissionDenied,
    #[error("Unable to schedule notification: {0}")]
    SchedulingFailed(String),
}

/// Registers the notification of a `Reminder` with the notification center.
/// Scheduling a `Reminder` again replaces its pending notification.
#[derive(Debug)]
pub struct ScheduleNotificationUseCase {
    pub reminder: Reminder,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleNotificationUseCase {
    type Response = NotificationRequest;

    type Errors = ScheduleError;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let request = build_notification_request(&self.reminder, &ctx.config.timezone);

        ctx.notifications
            .add(request.clone(), ctx.sys.now())
            .await
            .map_err(|e| ScheduleError::SchedulingFailed(e.to_string()))?;

        if ctx.notifications.authorization_status().await == AuthorizationStatus::Denied {
            return Err(ScheduleError::PermissionDenied);
        }

        Ok(request)
    }
}
