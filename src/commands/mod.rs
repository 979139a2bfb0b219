//! Command implementations for obsctl CLI

pub mod completions;
pub mod reconcile;
pub mod version;
