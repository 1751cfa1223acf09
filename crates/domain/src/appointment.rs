use crate::shared::entity::{Entity, ID};
use chrono::prelude::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: ID,
    pub doctor_name: String,
    pub date: DateTime<Utc>,
}

impl Appointment {
    pub fn new(doctor_name: &str, date: DateTime<Utc>) -> Self {
        Self {
            id: ID::new(),
            doctor_name: doctor_name.to_string(),
            date,
        }
    }
}

impl Entity for Appointment {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// What a patient fills in when booking an `Appointment` with a doctor
#[derive(Debug, Clone)]
pub struct AppointmentBooking {
    pub patient_name: String,
    pub email: String,
    pub doctor_name: String,
    pub date: DateTime<Utc>,
}

#[derive(Error, Debug, PartialEq)]
pub enum BookingValidationError {
    #[error("Please fill in all details.")]
    MissingDetails,
    #[error("The appointment date: {0} is in the past.")]
    DateInPast(DateTime<Utc>),
}

impl AppointmentBooking {
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), BookingValidationError> {
        if self.patient_name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(BookingValidationError::MissingDetails);
        }
        if self.date < now {
            return Err(BookingValidationError::DateInPast(self.date));
        }
        Ok(())
    }
}
