mod remind_about_health_alert;
mod search_health_alerts;

pub use remind_about_health_alert::remind_about_health_alert;
pub use search_health_alerts::search_health_alerts;
