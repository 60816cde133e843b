use crate::data::app_settings::SettingsWrapper;
use crate::data::persistence::{Persistable, get_data_dir};
use anyhow::Result;
use std::path::Path;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    run_in_dir(&dir)?;
    println!("Config initialized in {}.", dir.display());
    Ok(())
}

/// Writes the default config file into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    SettingsWrapper::default().save_to(dir)
}
