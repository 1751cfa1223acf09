mod appointment;
mod error;
mod health_alert;
mod job_schedulers;
mod notification;
mod permission;
mod reminder;
mod seed;
mod shared;

pub use appointment::book_appointment;
pub use error::ReminderError;
pub use health_alert::{remind_about_health_alert, search_health_alerts};
pub use job_schedulers::{deliver_notifications, start_delivery_job};
pub use notification::{build_notification_request, NotificationScheduler, ScheduleError};
pub use permission::{PermissionError, PermissionGate};
pub use reminder::ReminderStore;
pub use seed::seed_sample_data;

use health_reminders_infra::ReminderContext;
use tokio::task::JoinHandle;
use tracing::info;

pub struct Application {
    context: ReminderContext,
    delivery_job: JoinHandle<()>,
}

impl Application {
    pub async fn new(context: ReminderContext) -> Self {
        // Outcome is logged, reminders are scheduled either way
        let _ = PermissionGate::new(context.clone()).request_permission().await;

        if context.config.seed_sample_data {
            seed_sample_data(&context).await;
        }

        let delivery_job = start_delivery_job(context.clone());

        Self {
            context,
            delivery_job,
        }
    }

    pub fn context(&self) -> &ReminderContext {
        &self.context
    }

    pub fn store(&self) -> ReminderStore {
        ReminderStore::new(self.context.clone())
    }

    pub fn scheduler(&self) -> NotificationScheduler {
        NotificationScheduler::new(self.context.clone())
    }

    pub fn permission_gate(&self) -> PermissionGate {
        PermissionGate::new(self.context.clone())
    }

    /// Runs until the process receives ctrl-c
    pub async fn start(self) -> anyhow::Result<()> {
        tokio::signal::ctrl_c().await?;
        info!("Shutting down the notification delivery job");
        self.delivery_job.abort();
        Ok(())
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.delivery_job.abort();
    }
}
