//! Version record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One revision of a project, with the builds created from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Version {
    /// Version identifier
    pub version_id: String,

    /// Revision the version was created from
    #[serde(default)]
    pub revision: Option<String>,

    /// Project the version belongs to
    #[serde(default)]
    pub project: Option<String>,

    /// Branch the revision landed on
    #[serde(default)]
    pub branch: Option<String>,

    /// Commit author
    #[serde(default)]
    pub author: Option<String>,

    /// Commit message
    #[serde(default)]
    pub message: Option<String>,

    /// Current status
    pub status: String,

    /// When the version was created
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the version started building
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
}
