//! Version resolution for package tasks.
//!
//! - [`version`] - [`VersionResolver`] and the [`HasVersion`] capability

pub mod version;

pub use version::{
    ExportedVersion, ExtensionModule, HasVersion, ModuleLookup, ResolvedVersion, VersionResolver,
};
