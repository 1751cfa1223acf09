use crate::{reminder::add_reminder::AddReminderUseCase, shared::usecase::execute};
use chrono::Duration;
use health_reminders_domain::{Appointment, Reminder};
use health_reminders_infra::ReminderContext;
use tracing::{info, warn};

/// Adds the sample medicine and appointment reminders of the injected
/// fixtures to the store. Returns how many reminders were added.
pub async fn seed_sample_data(ctx: &ReminderContext) -> usize {
    let now = ctx.sys.now();
    let mut reminders = Vec::new();

    for medicine in &ctx.sample_data.medicines {
        reminders.push(Reminder::medicine(&medicine.name, medicine.time));
    }
    for sample in &ctx.sample_data.appointments {
        let date = Duration::try_days(sample.days_from_now)
            .and_then(|offset| now.checked_add_signed(offset));
        match date {
            Some(date) => {
                let appointment = Appointment::new(&sample.doctor_name, date);
                reminders.push(Reminder::appointment(&appointment, &ctx.config.timezone));
            }
            None => warn!(
                "Skipping sample appointment with {}: {} days from now is out of range",
                sample.doctor_name, sample.days_from_now
            ),
        }
    }

    let mut added = 0;
    for reminder in reminders {
        if execute(AddReminderUseCase { reminder }, ctx).await.is_ok() {
            added += 1;
        }
    }
    info!("Seeded {} sample reminders", added);
    added
}
