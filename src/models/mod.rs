//! Domain records returned by the API
//!
//! Explicit field-mapped structs rather than free-form JSON: identifiers
//! and status fields are required, everything the server may omit is
//! `Option` with a serde default. The request core never looks inside
//! these; it hands the accessor layer validated JSON and the mapping
//! happens here.

mod build;
mod host;
mod patch;
mod project;
mod stats;
mod task;
mod version;

pub use build::Build;
pub use host::{DistroInfo, Host};
pub use patch::Patch;
pub use project::Project;
pub use stats::TestStats;
pub use task::Task;
pub use version::Version;
