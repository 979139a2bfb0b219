//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - reconcile: Reconcile command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod reconcile;

pub use completions::CompletionsArgs;
pub use reconcile::ReconcileArgs;

/// obsctl - OBS project manifest reconciler
///
/// Verify that the projects listed in a YAML manifest exist on a remote
/// Open Build Service instance.
#[derive(Parser, Debug)]
#[command(
    name = "obsctl",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Reconcile a project manifest against the Open Build Service",
    long_about = "obsctl reads a YAML manifest enumerating Open Build Service projects and \
                  verifies, one project at a time, that each exists remotely. Reconcile here \
                  means verify: the tool reports existence, it never corrects divergence.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  obsctl reconcile                        \x1b[90m# Check ./projects.yaml\x1b[0m\n   \
                  obsctl reconcile -m paketo.yaml         \x1b[90m# Check a specific manifest\x1b[0m\n   \
                  obsctl completions zsh                  \x1b[90m# Generate shell completions\x1b[0m\n\n\
                  Requires OBS_USERNAME and OBS_PASSWORD in the environment.\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify manifest projects exist on the remote build service
    Reconcile(ReconcileArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_reconcile() {
        let cli = Cli::try_parse_from(["obsctl", "reconcile"]).unwrap();
        match cli.command {
            Commands::Reconcile(args) => {
                assert_eq!(args.manifest, PathBuf::from("projects.yaml"));
                assert_eq!(args.target, None);
            }
            _ => panic!("Expected Reconcile command"),
        }
    }

    #[test]
    fn test_cli_parsing_reconcile_with_manifest() {
        let cli =
            Cli::try_parse_from(["obsctl", "reconcile", "-m", "paketo/projects.yaml"]).unwrap();
        match cli.command {
            Commands::Reconcile(args) => {
                assert_eq!(args.manifest, PathBuf::from("paketo/projects.yaml"));
            }
            _ => panic!("Expected Reconcile command"),
        }
    }

    #[test]
    fn test_cli_parsing_reconcile_positional_target() {
        let cli = Cli::try_parse_from(["obsctl", "reconcile", "staging"]).unwrap();
        match cli.command {
            Commands::Reconcile(args) => {
                assert_eq!(args.target, Some("staging".to_string()));
            }
            _ => panic!("Expected Reconcile command"),
        }
    }

    #[test]
    fn test_cli_parsing_reconcile_rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["obsctl", "reconcile", "one", "two"]).is_err());
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["obsctl", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["obsctl", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_global_verbose() {
        let cli = Cli::try_parse_from(["obsctl", "-v", "reconcile"]).unwrap();
        assert!(cli.verbose);
    }
}
