//! Build record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One build: a group of tasks run against a version on a single variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Build {
    /// Build identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Project the build belongs to
    #[serde(default)]
    pub project_id: Option<String>,

    /// Version the build was created from
    #[serde(default)]
    pub version: Option<String>,

    /// Build variant name
    #[serde(default)]
    pub build_variant: Option<String>,

    /// Current status (e.g. `created`, `started`, `success`, `failed`)
    pub status: String,

    /// Whether the build has been activated
    #[serde(default)]
    pub activated: bool,

    /// When the build was created
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,

    /// When the first task started
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// When the last task finished
    #[serde(default)]
    pub finish_time: Option<DateTime<Utc>>,

    /// Identifiers of the tasks in this build
    #[serde(default)]
    pub tasks: Vec<String>,

    /// Total wall-clock time in milliseconds
    #[serde(default)]
    pub time_taken_ms: Option<u64>,
}
