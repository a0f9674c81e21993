//! Per-package findings and skip reasons

use serde::Serialize;

use crate::version::types::{Advisory, DependencyEdge};

/// Something worth reporting about a resolved package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Finding {
    /// The declared range resolved to a published version
    Matched { range: String, version: String },
    /// The resolved version is deprecated
    Deprecated { message: String },
    /// Advisories against the resolved version itself
    Advisories {
        package: String,
        version: String,
        advisories: Vec<Advisory>,
    },
    /// A direct dependency of the resolved version that carries advisories
    DependencyAdvisories {
        package: String,
        version: String,
        dependency: DependencyEdge,
    },
}

impl Finding {
    /// Number of issues this finding represents (deprecations and advisories)
    pub fn issue_count(&self) -> usize {
        match self {
            Finding::Matched { .. } => 0,
            Finding::Deprecated { .. } => 1,
            Finding::Advisories { advisories, .. } => advisories.len(),
            Finding::DependencyAdvisories { dependency, .. } => dependency.advisories.len(),
        }
    }
}

/// Why the remaining steps for a package were skipped
///
/// Every variant is local to one package; the batch always continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "camelCase")]
pub enum SkipReason {
    #[error("unsupported version range {0}")]
    InvalidRange(String),

    #[error("package not found")]
    NotFound,

    #[error("no package versions received")]
    NoVersions,

    #[error("no matching version found")]
    NoMatch,

    #[error("matching version not received")]
    NoMetadata,

    #[error("no package version dependencies received")]
    NoDependencyData,
}

/// Terminal state of one package's resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Reported,
    Skipped { reason: SkipReason },
}
