//! Parser layer
//! - types.rs: Common types (Section, ManifestEntry, PackageRequirement)
//! - package_json.rs: package.json loader
//! - error.rs: Manifest errors

pub mod error;
pub mod package_json;
pub mod types;

pub use error::ManifestError;
pub use package_json::Manifest;
pub use types::{ManifestEntry, PackageRequirement, Section};
