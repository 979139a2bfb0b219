use clap::Parser;
use std::path::PathBuf;

/// Arguments for the reconcile command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check the default manifest:\n    obsctl reconcile\n\n\
                  Check a manifest elsewhere in the tree:\n    obsctl reconcile --manifest paketo/projects.yaml\n\n\
                  Use verbose output:\n    obsctl reconcile -v")]
pub struct ReconcileArgs {
    /// Reconciliation target (reserved, currently unused)
    pub target: Option<String>,

    /// Path to the manifest to read
    #[arg(
        long = "manifest",
        short = 'm',
        value_name = "PATH",
        default_value = crate::manifest_path::DEFAULT_MANIFEST
    )]
    pub manifest: PathBuf,
}
