//! Config-file credential discovery
//!
//! A collaborator layer over the request core: scans the known config file
//! locations, parses the first one found, and hands back a resolved
//! [`Credential`]. The core itself never touches the filesystem; see
//! [`crate::client::TreelineClient::from_default_config`] for the wiring.

use std::path::{Path, PathBuf};

use directories::UserDirs;
use serde::Deserialize;

use crate::auth::Credential;
use crate::error::{Error, Result};

/// Config file name searched for in each location
pub const CONFIG_FILE_NAME: &str = ".treeline.yml";

/// Contents of a user config file
#[derive(Debug, Clone, Deserialize)]
pub struct FileConfig {
    /// Principal identifier
    pub user: String,
    /// Secret key
    pub api_key: String,
    /// Optional server origin override
    #[serde(default)]
    pub api_server: Option<String>,
}

impl FileConfig {
    /// Parse a config file at an explicit path
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Search the known locations and parse the first config file found
    ///
    /// Locations, in order: `./.treeline.yml`, `~/.treeline.yml`,
    /// `~/cli_bin/.treeline.yml`. Returns `Ok(None)` when none exists.
    pub fn discover() -> Result<Option<Self>> {
        for path in default_locations() {
            if path.is_file() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// The credential this config resolves to
    pub fn credential(&self) -> Credential {
        Credential::new(&self.user, &self.api_key)
    }
}

/// The fixed locations scanned by [`FileConfig::discover`]
fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
    if let Some(dirs) = UserDirs::new() {
        let home = dirs.home_dir();
        locations.push(home.join(CONFIG_FILE_NAME));
        locations.push(home.join("cli_bin").join(CONFIG_FILE_NAME));
    }
    locations
}

/// Load the discovered config or fail with a config error
pub(crate) fn require_default_config() -> Result<FileConfig> {
    FileConfig::discover()?
        .ok_or_else(|| Error::config(format!("no {CONFIG_FILE_NAME} found in known locations")))
}
