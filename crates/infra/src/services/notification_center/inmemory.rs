use super::{INotificationCenter, NotificationCenterError};
use chrono::prelude::*;
use chrono_tz::Tz;
use health_reminders_domain::{
    AuthorizationOption, AuthorizationStatus, DeliveredNotification, NotificationRequest,
};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex, MutexGuard,
};
use tracing::info;

/// How many delivered notifications are remembered
const DELIVERED_HISTORY_LIMIT: usize = 256;

#[derive(Debug, Clone)]
struct PendingNotification {
    request: NotificationRequest,
    fire_at: DateTime<Utc>,
}

/// Notification center living inside the process. It keeps pending requests
/// in memory and hands them out from `deliver_due` once they are due.
pub struct InMemoryNotificationCenter {
    tz: Tz,
    /// Decision recorded on the first authorization request
    grant_on_request: bool,
    authorization: Mutex<AuthorizationStatus>,
    authorization_prompts: AtomicUsize,
    pending: Mutex<Vec<PendingNotification>>,
    submissions: Mutex<Vec<NotificationRequest>>,
    removals: Mutex<Vec<String>>,
    delivered: Mutex<Vec<DeliveredNotification>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl InMemoryNotificationCenter {
    pub fn new(tz: Tz, grant_on_request: bool) -> Self {
        Self {
            tz,
            grant_on_request,
            authorization: Mutex::new(AuthorizationStatus::NotDetermined),
            authorization_prompts: AtomicUsize::new(0),
            pending: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            removals: Mutex::new(Vec::new()),
            delivered: Mutex::new(Vec::new()),
        }
    }

    /// Every request passed to `add`, including replaced ones
    pub fn submissions(&self) -> Vec<NotificationRequest> {
        lock(&self.submissions).clone()
    }

    /// Every identifier passed to `remove_pending`, known or not
    pub fn removals(&self) -> Vec<String> {
        lock(&self.removals).clone()
    }

    /// How many times the user has actually been prompted
    pub fn authorization_prompts(&self) -> usize {
        self.authorization_prompts.load(Ordering::SeqCst)
    }

    /// The most recently delivered notifications, oldest first
    pub fn delivered(&self) -> Vec<DeliveredNotification> {
        lock(&self.delivered).clone()
    }

    /// The instant the pending request with the given identifier fires next
    pub fn next_fire(&self, identifier: &str) -> Option<DateTime<Utc>> {
        lock(&self.pending)
            .iter()
            .find(|p| p.request.identifier == identifier)
            .map(|p| p.fire_at)
    }
}

#[async_trait::async_trait]
impl INotificationCenter for InMemoryNotificationCenter {
    async fn request_authorization(
        &self,
        options: &[AuthorizationOption],
    ) -> Result<AuthorizationStatus, NotificationCenterError> {
        let mut status = lock(&self.authorization);
        if *status == AuthorizationStatus::NotDetermined {
            self.authorization_prompts.fetch_add(1, Ordering::SeqCst);
            *status = if self.grant_on_request {
                AuthorizationStatus::Authorized
            } else {
                AuthorizationStatus::Denied
            };
            info!(
                "Notification authorization for {:?} was decided: {:?}",
                options, *status
            );
        }
        Ok(*status)
    }

    async fn authorization_status(&self) -> AuthorizationStatus {
        *lock(&self.authorization)
    }

    async fn add(
        &self,
        request: NotificationRequest,
        submitted_at: DateTime<Utc>,
    ) -> Result<(), NotificationCenterError> {
        lock(&self.submissions).push(request.clone());

        let mut pending = lock(&self.pending);
        pending.retain(|p| p.request.identifier != request.identifier);

        let fire_at = request
            .trigger
            .first_fire(submitted_at, &self.tz)
            .ok_or_else(|| NotificationCenterError::InvalidTrigger(request.identifier.clone()))?;
        pending.push(PendingNotification { request, fire_at });
        Ok(())
    }

    async fn remove_pending(&self, identifiers: &[String]) {
        lock(&self.removals).extend(identifiers.iter().cloned());
        lock(&self.pending).retain(|p| !identifiers.contains(&p.request.identifier));
    }

    async fn pending_requests(&self) -> Vec<NotificationRequest> {
        lock(&self.pending)
            .iter()
            .map(|p| p.request.clone())
            .collect()
    }

    async fn deliver_due(&self, now: DateTime<Utc>) -> Vec<DeliveredNotification> {
        let authorized = lock(&self.authorization).is_authorized();
        let mut fired = Vec::new();

        let mut pending = lock(&self.pending);
        let mut still_pending = Vec::with_capacity(pending.len());
        for mut p in pending.drain(..) {
            if p.fire_at > now {
                still_pending.push(p);
                continue;
            }
            if authorized {
                fired.push(DeliveredNotification {
                    identifier: p.request.identifier.clone(),
                    content: p.request.content.clone(),
                    delivered_at: now,
                });
            }
            if let Some(next) = p.request.trigger.next_fire(p.fire_at, now, &self.tz) {
                p.fire_at = next;
                still_pending.push(p);
            }
        }
        *pending = still_pending;
        drop(pending);

        let mut delivered = lock(&self.delivered);
        delivered.extend(fired.iter().cloned());
        let overflow = delivered.len().saturating_sub(DELIVERED_HISTORY_LIMIT);
        delivered.drain(..overflow);
        drop(delivered);
        fired
    }
}
