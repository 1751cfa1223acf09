use crate::health_alert::HealthAlert;
use chrono::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleMedicine {
    pub name: String,
    pub time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleAppointment {
    pub doctor_name: String,
    /// Appointments are placed relative to the moment the data is seeded
    pub days_from_now: i64,
}

/// Read only fixture data that is injected into the application at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleData {
    #[serde(default)]
    pub medicines: Vec<SampleMedicine>,
    #[serde(default)]
    pub appointments: Vec<SampleAppointment>,
    #[serde(default)]
    pub health_alerts: Vec<HealthAlert>,
}

impl SampleData {
    pub fn empty() -> Self {
        Self {
            medicines: Vec::new(),
            appointments: Vec::new(),
            health_alerts: Vec::new(),
        }
    }
}

fn medicine(name: &str, hour: u32) -> SampleMedicine {
    SampleMedicine {
        name: name.into(),
        time: Utc
            .with_ymd_and_hms(2023, 10, 5, hour, 0, 0)
            .single()
            .unwrap_or_else(Utc::now),
    }
}

fn appointment(doctor_name: &str, days_from_now: i64) -> SampleAppointment {
    SampleAppointment {
        doctor_name: doctor_name.into(),
        days_from_now,
    }
}

impl Default for SampleData {
    fn default() -> Self {
        Self {
            medicines: vec![
                medicine("Aspirin", 9),
                medicine("Metformin", 13),
                medicine("Lisinopril", 20),
            ],
            appointments: vec![
                appointment("Dr. Smith", 1),
                appointment("Dr. Johnson", 3),
                appointment("Dr. Patel", 5),
            ],
            health_alerts: vec![
                HealthAlert::new(
                    "Influenza (Flu)",
                    "Influenza is a contagious respiratory illness caused by flu viruses.",
                    "Get a flu vaccine yearly, wash hands, and avoid close contact with sick individuals.",
                ),
                HealthAlert::new(
                    "COVID-19",
                    "COVID-19 is a disease caused by the SARS-CoV-2 virus, leading to respiratory issues.",
                    "Wear masks, maintain social distancing, and get vaccinated.",
                ),
                HealthAlert::new(
                    "Dengue Fever",
                    "Dengue is a mosquito-borne disease causing high fever and joint pain.",
                    "Use mosquito repellents, remove standing water, and wear full sleeves.",
                ),
                HealthAlert::new(
                    "Heart Disease",
                    "Heart diseases affect the heart and blood vessels, leading to serious conditions.",
                    "Eat a healthy diet, exercise regularly, and manage stress.",
                ),
                HealthAlert::new(
                    "Diabetes",
                    "Diabetes is a chronic disease affecting blood sugar levels.",
                    "Maintain a balanced diet, exercise, and monitor blood sugar levels.",
                ),
            ],
        }
    }
}
