//! CLI argument definitions.

use clap::Parser;

/// Install host-application extensions and the Python packages they need.
///
/// With no argument, runs the configured manifest (or the built-in one).
/// With an extension name, installs just that extension.
#[derive(Debug, Parser)]
#[command(name = "extprov")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Install only this extension and exit
    pub extension: Option<String>,
}
