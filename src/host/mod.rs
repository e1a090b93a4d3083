//! Process-backed clients for a real host installation.
//!
//! - [`application`] - [`HostApplication`], the extension manager and module
//!   lookup that run Python snippets inside the host executable
//! - [`pip`] - [`PipInstaller`], the package installer using the host's Python
//! - [`snippet`] - The Python snippets and their exit-status protocol

pub mod application;
pub mod pip;
pub mod snippet;

pub use application::HostApplication;
pub use pip::PipInstaller;
