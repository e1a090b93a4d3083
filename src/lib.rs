//! extprov - Manifest-driven installer for host-application extensions.
//!
//! Installs a list of extensions into a host application (3D Slicer is the
//! reference host) through its extensions manager, and the Python packages
//! they need through the host's `pip`. A package may take its version from
//! an installed extension's module, so the two stay in lockstep.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`clients`] - Traits for the host's extension manager and package installer
//! - [`config`] - Configuration loading and merging
//! - [`error`] - Error types and result aliases
//! - [`host`] - Clients backed by the real host processes
//! - [`manifest`] - Tasks and manifest validation
//! - [`orchestrator`] - Manifest execution and run reports
//! - [`resolver`] - Package versions derived from extension modules
//! - [`shell`] - Child-process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use extprov::manifest::{Manifest, Task};
//!
//! let manifest = Manifest::builtin();
//! assert!(matches!(manifest.tasks()[0], Task::Extension(_)));
//! ```

pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod host;
pub mod manifest;
pub mod orchestrator;
pub mod resolver;
pub mod shell;
pub mod ui;

pub use error::{ProvisionError, Result};
