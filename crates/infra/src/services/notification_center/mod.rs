mod inmemory;

pub use inmemory::InMemoryNotificationCenter;

use chrono::prelude::*;
use health_reminders_domain::{
    AuthorizationOption, AuthorizationStatus, DeliveredNotification, NotificationRequest,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationCenterError {
    #[error("The trigger of notification request: {0} never fires")]
    InvalidTrigger(String),
}

/// The platform service that delivers local notifications. Requests are keyed
/// by their identifier: adding a request with an identifier that is already
/// pending replaces it.
#[async_trait::async_trait]
pub trait INotificationCenter: Send + Sync {
    /// Asks the user for authorization. Only the first call prompts, later
    /// calls return the decision that was made then.
    async fn request_authorization(
        &self,
        options: &[AuthorizationOption],
    ) -> Result<AuthorizationStatus, NotificationCenterError>;
    async fn authorization_status(&self) -> AuthorizationStatus;
    async fn add(
        &self,
        request: NotificationRequest,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), NotificationCenterError>;
    /// Unknown identifiers are ignored
    async fn remove_pending(&self, identifiers: &[String]);
    async fn pending_requests(&self) -> Vec<NotificationRequest>;
    /// Fires every pending request that is due at `now`. One-shot requests
    /// are dropped afterwards and repeating requests are armed again.
    async fn deliver_due(&self, now: DateTime<Utc>) -> Vec<DeliveredNotification>;
}
