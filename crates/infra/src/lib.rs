mod config;
mod events;
mod repos;
mod sample_data;
mod services;
mod system;

pub use config::Config;
pub use events::{ReminderEvents, ReminderStoreEvent};
use health_reminders_domain::SampleData;
pub use repos::{IReminderRepo, InMemoryReminderRepo, Repos};
pub use sample_data::{load_sample_data, SampleDataError};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};

#[derive(Clone)]
pub struct ReminderContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: Arc<dyn INotificationCenter>,
    pub events: ReminderEvents,
    /// Read only fixtures injected at startup
    pub sample_data: Arc<SampleData>,
}

impl ReminderContext {
    pub fn create(config: Config, sample_data: SampleData) -> Self {
        let notifications = Arc::new(InMemoryNotificationCenter::new(
            config.timezone,
            config.notifications_authorized,
        ));
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys: Arc::new(RealSys {}),
            notifications,
            events: ReminderEvents::default(),
            sample_data: Arc::new(sample_data),
        }
    }

    pub fn create_inmemory() -> Self {
        Self::create(Config::default(), SampleData::default())
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> Result<ReminderContext, SampleDataError> {
    let config = Config::new();
    let sample_data = load_sample_data(&config)?;
    Ok(ReminderContext::create(config, sample_data))
}
