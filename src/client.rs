//! The high-level client
//!
//! One client type owning the [`Executor`] as a capability; every resource
//! accessor is a method that builds a URL, runs one logical fetch, and maps
//! the validated JSON into a typed record.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Credential;
use crate::config;
use crate::error::{Error, Result};
use crate::http::Session;
use crate::models::{Build, Host, Patch, Project, Task, TestStats, Version};
use crate::pagination::Executor;
use crate::types::QueryParams;

/// Server origin used when none is configured
pub const DEFAULT_API_SERVER: &str = "https://ci.treeline.dev";

/// Client for the Treeline REST API
///
/// Construct once and reuse: the client holds one pooled connection
/// context for its lifetime.
#[derive(Debug)]
pub struct TreelineClient {
    executor: Executor,
}

impl TreelineClient {
    /// Create a client bound to `api_server`
    ///
    /// Pass `None` for anonymous access to public endpoints.
    pub fn new(api_server: impl Into<String>, credential: Option<Credential>) -> Result<Self> {
        let session = Session::new(api_server, credential.as_ref())?;
        Ok(Self {
            executor: Executor::new(session),
        })
    }

    /// Create a client against the default server
    pub fn with_default_server(credential: Option<Credential>) -> Result<Self> {
        Self::new(DEFAULT_API_SERVER, credential)
    }

    /// Create a client from the discovered config file
    ///
    /// Searches the known config file locations for credentials and an
    /// optional server override; fails if no config file exists.
    pub fn from_default_config() -> Result<Self> {
        let config = config::require_default_config()?;
        let server = config
            .api_server
            .clone()
            .unwrap_or_else(|| DEFAULT_API_SERVER.to_string());
        Self::new(server, Some(config.credential()))
    }

    /// The request executor, for callers issuing raw endpoint calls
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    // ============================================================================
    // Hosts
    // ============================================================================

    /// All hosts
    pub fn all_hosts(&self, params: Option<QueryParams>) -> Result<Vec<Host>> {
        self.fetch_collection("/hosts", params)
    }

    // ============================================================================
    // Projects
    // ============================================================================

    /// All projects
    pub fn all_projects(&self, params: Option<QueryParams>) -> Result<Vec<Project>> {
        self.fetch_collection("/projects", params)
    }

    /// One project by id
    pub fn project_by_id(&self, project_id: &str, params: Option<QueryParams>) -> Result<Project> {
        self.fetch_resource(&format!("/projects/{project_id}"), params)
    }

    /// Recent versions created in a project
    pub fn recent_versions_by_project(
        &self,
        project_id: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<Version>> {
        self.fetch_collection(&format!("/projects/{project_id}/recent_versions"), params)
    }

    /// Patches submitted against a project
    pub fn patches_by_project(
        &self,
        project_id: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<Patch>> {
        self.fetch_collection(&format!("/projects/{project_id}/patches"), params)
    }

    /// Patches submitted against a project since `start_at`
    pub fn recent_patches_by_project(
        &self,
        project_id: &str,
        start_at: DateTime<Utc>,
        params: Option<QueryParams>,
    ) -> Result<Vec<Patch>> {
        let params = params.unwrap_or_default().start_at(start_at);
        self.patches_by_project(project_id, Some(params))
    }

    /// Aggregated test statistics for a project
    pub fn test_stats_by_project(
        &self,
        project_id: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<TestStats>> {
        self.fetch_collection(&format!("/projects/{project_id}/test_stats"), params)
    }

    // ============================================================================
    // Builds
    // ============================================================================

    /// One build by id
    pub fn build_by_id(&self, build_id: &str, params: Option<QueryParams>) -> Result<Build> {
        self.fetch_resource(&format!("/builds/{build_id}"), params)
    }

    /// Tasks belonging to a build
    pub fn tasks_by_build(
        &self,
        build_id: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<Task>> {
        self.fetch_collection(&format!("/builds/{build_id}/tasks"), params)
    }

    // ============================================================================
    // Versions
    // ============================================================================

    /// One version by id
    pub fn version_by_id(&self, version_id: &str, params: Option<QueryParams>) -> Result<Version> {
        self.fetch_resource(&format!("/versions/{version_id}"), params)
    }

    /// Builds created from a version
    pub fn builds_by_version(
        &self,
        version_id: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<Build>> {
        self.fetch_collection(&format!("/versions/{version_id}/builds"), params)
    }

    // ============================================================================
    // Patches
    // ============================================================================

    /// One patch by id
    pub fn patch_by_id(&self, patch_id: &str, params: Option<QueryParams>) -> Result<Patch> {
        self.fetch_resource(&format!("/patches/{patch_id}"), params)
    }

    // ============================================================================
    // Shared mapping
    // ============================================================================

    /// Fetch a paginated collection and map each record into `T`
    fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource_path: &str,
        params: Option<QueryParams>,
    ) -> Result<Vec<T>> {
        let url = self.executor.build_url(resource_path);
        let records = self.executor.fetch_all(&url, params.as_ref())?;
        records.into_iter().map(from_record).collect()
    }

    /// Fetch a single resource and map it into `T`
    fn fetch_resource<T: DeserializeOwned>(
        &self,
        resource_path: &str,
        params: Option<QueryParams>,
    ) -> Result<T> {
        let url = self.executor.build_url(resource_path);
        let record = self.executor.fetch_single(&url, params.as_ref())?;
        from_record(record)
    }
}

/// Map one validated JSON record into a typed domain record
fn from_record<T: DeserializeOwned>(record: Value) -> Result<T> {
    serde_json::from_value(record).map_err(|e| Error::payload(format!("record mapping failed: {e}")))
}
