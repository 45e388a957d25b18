//! Project record

use serde::{Deserialize, Serialize};

/// A tracked repository and its build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier
    pub identifier: String,

    /// Human-readable name
    #[serde(default)]
    pub display_name: Option<String>,

    /// Whether the project is currently tracked
    #[serde(default)]
    pub enabled: bool,

    /// Repository owner
    #[serde(default)]
    pub owner_name: Option<String>,

    /// Repository name
    #[serde(default)]
    pub repo_name: Option<String>,

    /// Branch being tracked
    #[serde(default)]
    pub branch_name: Option<String>,

    /// Whether the project is hidden from unauthenticated users
    #[serde(default)]
    pub private: bool,

    /// Minutes between scheduled activation batches
    #[serde(default)]
    pub batch_time: Option<u32>,
}
