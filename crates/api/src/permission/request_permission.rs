use crate::shared::usecase::UseCase;
use health_reminders_domain::{AuthorizationOption, AuthorizationStatus};
use health_reminders_infra::ReminderContext;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, PartialEq)]
pub enum PermissionError {
    #[error("Unable to request notification permission: {0}")]
    RequestFailed(String),
}

#[derive(Debug)]
pub struct RequestPermissionUseCase;

#[async_trait::async_trait(?Send)]
impl UseCase for RequestPermissionUseCase {
    type Response = AuthorizationStatus;

    type Errors = PermissionError;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        let status = ctx
            .notifications
            .request_authorization(&[
                AuthorizationOption::Alert,
                AuthorizationOption::Sound,
                AuthorizationOption::Badge,
            ])
            .await
            .map_err(|e| PermissionError::RequestFailed(e.to_string()))?;

        if status == AuthorizationStatus::Denied {
            warn!("Notifications are not authorized, reminders will not be delivered");
        }

        Ok(status)
    }
}
