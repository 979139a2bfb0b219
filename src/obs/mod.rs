//! Remote Open Build Service access
//!
//! All network communication lives behind the [`ProjectLookup`] trait so the
//! reconcile loop can be exercised against scripted lookups in tests.
//!
//! - [`client`]: blocking HTTP client for the OBS API
//! - [`meta`]: project meta XML handling

pub mod client;
pub mod meta;

pub use client::ObsClient;

use crate::error::Result;

/// Metadata returned for a remote project
///
/// Only the name is carried; it is the single field this tool compares
/// against the manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMeta {
    pub name: String,
}

/// Looks up project metadata on a remote build service
pub trait ProjectLookup {
    /// Fetch metadata for the named project.
    ///
    /// Returns `Ok(None)` when the remote side reports the project as
    /// absent; transport and API failures are errors.
    fn project_meta(&self, name: &str) -> Result<Option<ProjectMeta>>;
}
