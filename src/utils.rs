use std::env;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::constants::{APPLICATION, DEFAULT_CONFIG_FILE, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, generic_error};

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))
}

/// Locations searched for a configuration file when none is given
///
/// Missing files are skipped by the loader, so nothing here has to exist.
pub fn default_config_paths() -> Vec<PathBuf> {
    match find_project_folder() {
        Ok(folder) => vec![folder.config_dir().join(DEFAULT_CONFIG_FILE)],
        Err(e) => {
            log::debug!("No default configuration location: {e}");
            Vec::new()
        }
    }
}

/// Default location of the log file, inside the temporary directory
pub fn default_log_file() -> PathBuf {
    env::temp_dir().join(format!("{APPLICATION}.log"))
}
