//! Host record

use serde::{Deserialize, Serialize};

/// A machine running tasks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Host {
    /// Host identifier
    pub host_id: String,

    /// DNS name or address of the host
    #[serde(default)]
    pub host_url: Option<String>,

    /// Distro the host was provisioned from
    #[serde(default)]
    pub distro: Option<DistroInfo>,

    /// Current status (e.g. `running`, `terminated`)
    pub status: String,

    /// Who started the host
    #[serde(default)]
    pub started_by: Option<String>,

    /// Whether this is a user-spawned host
    #[serde(default)]
    pub user_host: bool,

    /// Identifier of the task currently running, if any
    #[serde(default)]
    pub running_task: Option<String>,
}

/// Distro details nested in a host record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistroInfo {
    /// Distro identifier
    #[serde(default)]
    pub distro_id: Option<String>,

    /// Cloud provider backing the distro
    #[serde(default)]
    pub provider: Option<String>,
}
