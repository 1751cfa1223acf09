pub mod request_permission;

pub use request_permission::PermissionError;

use crate::shared::usecase::execute;
use health_reminders_domain::AuthorizationStatus;
use health_reminders_infra::ReminderContext;
use request_permission::RequestPermissionUseCase;

/// Asks for notification authorization the first time a screen that deals
/// with reminders is shown. Safe to call any number of times and a denial
/// does not stop reminders from being scheduled.
#[derive(Clone)]
pub struct PermissionGate {
    ctx: ReminderContext,
}

impl PermissionGate {
    pub fn new(ctx: ReminderContext) -> Self {
        Self { ctx }
    }

    pub async fn request_permission(&self) -> Result<AuthorizationStatus, PermissionError> {
        execute(RequestPermissionUseCase, &self.ctx).await
    }
}
