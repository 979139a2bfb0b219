//! Configuration data structures for obsctl
//!
//! - [`manifest`]: the YAML project manifest model and loader

pub mod manifest;

pub use manifest::{Package, Project, ProjectsManifest};
