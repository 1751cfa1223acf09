use crate::config::Config;
use health_reminders_domain::SampleData;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleDataError {
    #[error("Unable to read sample data file: {0}")]
    Read(String, #[source] std::io::Error),
    #[error("Sample data file: {0} is malformed")]
    Parse(String, #[source] serde_json::Error),
}

/// Loads the fixtures named by the `Config`, or the built in ones
pub fn load_sample_data(config: &Config) -> Result<SampleData, SampleDataError> {
    match &config.sample_data_path {
        None => Ok(SampleData::default()),
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|e| SampleDataError::Read(path.clone(), e))?;
            serde_json::from_str(&contents).map_err(|e| SampleDataError::Parse(path.clone(), e))
        }
    }
}
