use crate::shared::usecase::UseCase;
use health_reminders_domain::Reminder;
use health_reminders_infra::ReminderContext;

#[derive(Debug)]
pub struct GetRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.reminders.find_all().await)
    }
}
