use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// Label rendered above the calendar.
    pub landing_label: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            landing_label: "Current Bookings".to_string(),
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml, so the file can
/// grow other top-level keys without breaking this reader.
#[derive(Serialize, Deserialize, Default, Debug)]
pub(crate) struct SettingsWrapper {
    #[serde(default)]
    pub(crate) settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }
}
