//! Reconcile command implementation
//!
//! Wires together the credential loader, manifest path resolver, manifest
//! loader, and the remote client, then walks the project list in manifest
//! order. The walk short-circuits: the first project whose remote lookup
//! comes back absent or mismatched aborts the run, so a single invocation
//! never reports more than one problem project.

use console::Style;

use crate::cli::ReconcileArgs;
use crate::config::ProjectsManifest;
use crate::credentials::Credentials;
use crate::error::{ObsctlError, Result};
use crate::manifest_path;
use crate::obs::{ObsClient, ProjectLookup};

/// Run reconcile command
pub fn run(args: ReconcileArgs, verbose: bool) -> Result<()> {
    let credentials = Credentials::from_env();
    if credentials.is_empty() {
        // Nothing else is touched without credentials: no manifest read,
        // no remote lookup
        return Err(ObsctlError::CredentialsMissing);
    }

    let resolved = manifest_path::resolve(&args.manifest)?;
    let manifest = ProjectsManifest::load(&resolved.path())?;

    let client = ObsClient::new(&credentials)?;
    reconcile_projects(&manifest, &client, verbose)
}

/// Verify every manifest project exists remotely, in manifest order.
///
/// Subprojects are not traversed; only top-level entries are checked.
fn reconcile_projects(
    manifest: &ProjectsManifest,
    lookup: &impl ProjectLookup,
    verbose: bool,
) -> Result<()> {
    for (index, project) in manifest.projects.iter().enumerate() {
        if project.name.is_empty() {
            return Err(ObsctlError::UnnamedProject { index });
        }

        if verbose {
            println!(
                "Checking project {}",
                Style::new().bold().yellow().apply_to(&project.name)
            );
        }

        match lookup.project_meta(&project.name)? {
            Some(remote) if remote.name == project.name => {}
            _ => {
                return Err(ObsctlError::ProjectMissing {
                    name: project.name.clone(),
                });
            }
        }
    }

    println!("{}", Style::new().green().apply_to("Project exists!"));
    Ok(())
}
