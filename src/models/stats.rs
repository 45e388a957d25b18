//! Test statistics record

use serde::{Deserialize, Serialize};

/// Aggregated pass/fail statistics for one test file in one task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestStats {
    /// Test file the statistics cover
    pub test_file: String,

    /// Task the test ran in
    #[serde(default)]
    pub task_name: Option<String>,

    /// Build variant the task ran on
    #[serde(default)]
    pub variant: Option<String>,

    /// Distro the task ran on
    #[serde(default)]
    pub distro: Option<String>,

    /// Date the statistics were aggregated for
    #[serde(default)]
    pub date: Option<String>,

    /// Number of passing executions
    #[serde(default)]
    pub num_pass: u64,

    /// Number of failing executions
    #[serde(default)]
    pub num_fail: u64,

    /// Average duration of passing executions, in seconds
    #[serde(default)]
    pub avg_duration_pass: Option<f64>,
}
