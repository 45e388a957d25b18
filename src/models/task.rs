//! Task record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One unit of work inside a build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier
    pub task_id: String,

    /// Display name of the task
    #[serde(default)]
    pub display_name: Option<String>,

    /// Build the task belongs to
    #[serde(default)]
    pub build_id: Option<String>,

    /// Version the task belongs to
    #[serde(default)]
    pub version_id: Option<String>,

    /// Project the task belongs to
    #[serde(default)]
    pub project_id: Option<String>,

    /// Current status
    pub status: String,

    /// Execution attempt number, starting at 0
    #[serde(default)]
    pub execution: u32,

    /// When the task started running
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// When the task finished
    #[serde(default)]
    pub finish_time: Option<DateTime<Utc>>,

    /// Total runtime in milliseconds
    #[serde(default)]
    pub time_taken_ms: Option<u64>,
}
