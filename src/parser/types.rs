//! Common types for manifest parsing

use std::fmt;

use serde::Serialize;

use crate::version::error::RangeError;
use crate::version::range::RangeExpression;

/// Dependency section of a package manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    #[serde(rename = "dependencies")]
    Dependencies,
    #[serde(rename = "devDependencies")]
    DevDependencies,
}

impl Section {
    /// Returns the manifest key of the section
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dependencies => "dependencies",
            Section::DevDependencies => "devDependencies",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `name: range` pair as written in the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Package name (e.g., "lodash", "@types/node")
    pub name: String,
    /// Range text exactly as declared
    pub raw_range: String,
    pub section: Section,
}

impl ManifestEntry {
    /// Parse the declared range into a requirement
    pub fn requirement(&self) -> Result<PackageRequirement, RangeError> {
        Ok(PackageRequirement {
            name: self.name.clone(),
            range: self.raw_range.parse()?,
            section: self.section,
        })
    }
}

/// A package together with the parsed range it must satisfy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRequirement {
    pub name: String,
    pub range: RangeExpression,
    pub section: Section,
}
