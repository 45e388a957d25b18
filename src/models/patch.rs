//! Patch record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An uncommitted changeset submitted for testing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    /// Patch identifier
    pub patch_id: String,

    /// Short description supplied at submission
    #[serde(default)]
    pub description: Option<String>,

    /// Project the patch targets
    #[serde(default)]
    pub project_id: Option<String>,

    /// Branch the patch is based on
    #[serde(default)]
    pub branch: Option<String>,

    /// Base revision the patch applies on top of
    #[serde(default)]
    pub git_hash: Option<String>,

    /// Current status
    pub status: String,

    /// Submitting user
    #[serde(default)]
    pub author: Option<String>,

    /// When the patch was submitted
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,

    /// Version created from the patch once activated
    #[serde(default)]
    pub version: Option<String>,

    /// Whether the patch has been finalized and scheduled
    #[serde(default)]
    pub activated: bool,
}
