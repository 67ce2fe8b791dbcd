// Settings module
// User-facing configuration persisted to the settings file

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::anniversary::{Anniversary, AnniversaryDate, AnniversaryError};
use super::tribute::TributeContent;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    pub use_system_theme: bool,
    pub music_enabled: bool,
    pub effects_enabled: bool,
    pub honoree: String,
    pub anniversary_month: u32,
    pub anniversary_day: u32,
    pub first_observed: NaiveDate,
    pub content: TributeContent,
}

impl Default for Settings {
    fn default() -> Self {
        let anniversary = Anniversary::default();
        Self {
            theme: "light".to_string(),
            use_system_theme: false,
            music_enabled: false,
            effects_enabled: true,
            honoree: "Roju".to_string(),
            anniversary_month: anniversary.date.month(),
            anniversary_day: anniversary.date.day(),
            first_observed: anniversary.first_observed,
            content: TributeContent::default(),
        }
    }
}

impl Settings {
    /// Build the validated anniversary these settings describe.
    pub fn anniversary(&self) -> Result<Anniversary, AnniversaryError> {
        let date = AnniversaryDate::new(self.anniversary_month, self.anniversary_day)?;
        Ok(Anniversary::new(date, self.first_observed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_describe_a_valid_anniversary() {
        let settings = Settings::default();
        let anniversary = settings.anniversary().unwrap();
        assert_eq!(anniversary.date.month(), 10);
        assert_eq!(anniversary.date.day(), 4);
    }

    #[test]
    fn invalid_month_surfaces_as_error() {
        let settings = Settings {
            anniversary_month: 14,
            ..Settings::default()
        };
        assert!(settings.anniversary().is_err());
    }
}
