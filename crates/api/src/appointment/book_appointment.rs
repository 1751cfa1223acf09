use crate::{
    error::ReminderError,
    reminder::add_reminder::AddReminderUseCase,
    shared::usecase::{execute, UseCase},
};
use health_reminders_domain::{
    Appointment, AppointmentBooking, BookingValidationError, Reminder,
};
use health_reminders_infra::ReminderContext;

fn handle_error(e: UseCaseErrors) -> ReminderError {
    match e {
        UseCaseErrors::InvalidBooking(e) => ReminderError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => ReminderError::InternalError,
    }
}

/// Books an `Appointment` and sets up the reminder that fires an hour before it
pub async fn book_appointment(
    booking: AppointmentBooking,
    ctx: &ReminderContext,
) -> Result<Appointment, ReminderError> {
    let usecase = BookAppointmentUseCase { booking };

    execute(usecase, ctx).await.map_err(handle_error)
}

#[derive(Debug)]
pub struct BookAppointmentUseCase {
    pub booking: AppointmentBooking,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidBooking(BookingValidationError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for BookAppointmentUseCase {
    type Response = Appointment;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Errors> {
        self.booking
            .validate(ctx.sys.now())
            .map_err(UseCaseErrors::InvalidBooking)?;

        let appointment = Appointment::new(&self.booking.doctor_name, self.booking.date);
        let add_reminder = AddReminderUseCase {
            reminder: Reminder::appointment(&appointment, &ctx.config.timezone),
        };
        execute(add_reminder, ctx)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(appointment)
    }
}
