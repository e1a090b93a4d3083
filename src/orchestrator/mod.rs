//! Manifest-driven installation.
//!
//! - [`run`] - [`InstallationOrchestrator`] and the single-extension entry point
//! - [`result`] - Per-task outcomes and the [`RunReport`]
//!
//! # Example
//!
//! ```
//! use extprov::clients::MockHost;
//! use extprov::manifest::{ExtensionTask, Manifest, PackageTask};
//! use extprov::orchestrator::{InstallationOrchestrator, RunOptions, TaskOutcome};
//! use extprov::resolver::VersionResolver;
//!
//! let host = MockHost::new().with_registry_extension("A", Some("1.2.3"));
//! let manifest = Manifest::new(vec![
//!     ExtensionTask::new("A").into(),
//!     PackageTask::derived("morphosource", ExtensionTask::new("A")).into(),
//! ])
//! .unwrap();
//!
//! let orchestrator =
//!     InstallationOrchestrator::new(&host, &host, VersionResolver::new(&host), RunOptions::default());
//! let report = orchestrator.run(&manifest);
//!
//! assert_eq!(report.results[1].outcome, TaskOutcome::Installed);
//! assert_eq!(host.package_requirements(), vec!["morphosource==1.2.3".to_string()]);
//! ```

pub mod result;
pub mod run;

pub use result::{
    FailureKind, InstallResult, RunPolicy, RunReport, TaskOutcome, TaskState,
};
pub use run::{install_single_extension, InstallationOrchestrator, RunOptions, RunProgress};
