//! Project manifest (projects.yaml) model and loader
//!
//! The manifest enumerates OBS projects to reconcile. Decoding is as strict
//! as the serde mapping makes it: wrong types fail, unrecognized extra fields
//! are ignored, and no validation beyond the type shape happens at load time
//! (no duplicate-name or recursion checks).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ObsctlError, Result};

/// Top-level manifest: an ordered list of projects
///
/// Insertion order equals file order and is preserved; reconciliation walks
/// the list front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectsManifest {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A single manifest entry mapped to a remote OBS project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Remote project identity; required for reconciliation
    ///
    /// Decodes to an empty string when absent from the file; the reconcile
    /// loop rejects such entries before any remote lookup
    #[serde(default)]
    pub name: String,

    /// Reference to a parent project's name; informational only, no
    /// referential integrity is enforced
    #[serde(rename = "rootProject", default, skip_serializing_if = "Option::is_none")]
    pub root_project: Option<String>,

    /// Packages declared to belong to the project; not checked against the
    /// remote system
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<Package>,

    /// Nested manifest entries; the reconciliation loop does not descend
    /// into these
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subprojects: Vec<Project>,
}

/// A package identity within a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
}

impl ProjectsManifest {
    /// Read and decode the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ObsctlError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| ObsctlError::ManifestParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Decode a manifest from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Encode the manifest to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
