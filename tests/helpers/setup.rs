use chrono::prelude::*;
use chrono_tz::Tz;
use health_reminders_api::{NotificationScheduler, PermissionGate, ReminderStore};
use health_reminders_domain::SampleData;
use health_reminders_infra::{Config, InMemoryNotificationCenter, ReminderContext, StaticTimeSys};
use std::sync::Arc;

pub struct TestApp {
    pub ctx: ReminderContext,
    pub center: Arc<InMemoryNotificationCenter>,
    pub store: ReminderStore,
    pub scheduler: NotificationScheduler,
    pub permission_gate: PermissionGate,
}

/// Context frozen at `now` whose notification center is shared with the test
pub fn setup_app(now: DateTime<Utc>, config: Config) -> TestApp {
    let mut ctx = ReminderContext::create(config.clone(), SampleData::default());
    ctx.sys = Arc::new(StaticTimeSys(now.timestamp_millis()));
    let center = Arc::new(InMemoryNotificationCenter::new(
        config.timezone,
        config.notifications_authorized,
    ));
    ctx.notifications = center.clone();

    TestApp {
        store: ReminderStore::new(ctx.clone()),
        scheduler: NotificationScheduler::new(ctx.clone()),
        permission_gate: PermissionGate::new(ctx.clone()),
        ctx,
        center,
    }
}

pub fn default_config() -> Config {
    Config {
        timezone: Tz::UTC,
        seed_sample_data: false,
        ..Default::default()
    }
}
