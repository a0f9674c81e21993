//! Values returned by a [`Registry`](crate::version::registry::Registry)

use semver::Version;
use serde::Serialize;

/// Published versions of one package, ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageVersions {
    pub versions: Vec<Version>,
}

impl PackageVersions {
    pub fn new(versions: Vec<Version>) -> Self {
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// A reported security or quality issue tied to a package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub severity: String,
    pub title: String,
    pub package: String,
    pub version: String,
}

/// Deprecation and advisory data for one published version
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMetadata {
    pub deprecated: Option<String>,
    pub advisories: Vec<Advisory>,
}

/// One dependency declared by a published version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyEdge {
    pub package: String,
    pub version: String,
    pub advisories: Vec<Advisory>,
}

impl DependencyEdge {
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}
