use crate::shared::usecase::{execute, UseCase};
use health_reminders_domain::HealthAlert;
use health_reminders_infra::ReminderContext;

pub async fn search_health_alerts(query: &str, ctx: &ReminderContext) -> Vec<HealthAlert> {
    let usecase = SearchHealthAlertsUseCase {
        query: query.to_string(),
    };
    match execute(usecase, ctx).await {
        Ok(alerts) => alerts,
        Err(e) => match e {},
    }
}

#[derive(Debug)]
pub struct SearchHealthAlertsUseCase {
    pub query: String,
}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for SearchHealthAlertsUseCase {
    type Response = Vec<HealthAlert>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        Ok(health_reminders_domain::search_health_alerts(
            &ctx.sample_data.health_alerts,
            &self.query,
        ))
    }
}
