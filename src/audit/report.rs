//! Report structures accumulated by the audit

use std::path::{Path, PathBuf};

use semver::Version;
use serde::Serialize;

use crate::audit::finding::{Finding, Outcome};
use crate::parser::types::{ManifestEntry, Section};

/// Everything learned about one manifest entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageReport {
    pub name: String,
    /// Range text exactly as declared in the manifest
    pub range: String,
    pub section: Section,
    pub resolved_version: Option<Version>,
    pub findings: Vec<Finding>,
    pub outcome: Outcome,
}

impl PackageReport {
    pub fn new(entry: &ManifestEntry) -> Self {
        Self {
            name: entry.name.clone(),
            range: entry.raw_range.clone(),
            section: entry.section,
            resolved_version: None,
            findings: Vec::new(),
            outcome: Outcome::Reported,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skipped { .. })
    }

    pub fn issue_count(&self) -> usize {
        self.findings.iter().map(Finding::issue_count).sum()
    }
}

/// Result for one manifest section; `packages` is empty when the section is missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionReport {
    pub section: Section,
    pub missing: bool,
    pub packages: Vec<PackageReport>,
}

impl SectionReport {
    pub fn missing(section: Section) -> Self {
        Self {
            section,
            missing: true,
            packages: Vec::new(),
        }
    }

    pub fn audited(section: Section, packages: Vec<PackageReport>) -> Self {
        Self {
            section,
            missing: false,
            packages,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummary {
    pub packages: usize,
    pub findings: usize,
    pub skipped: usize,
    pub missing_sections: usize,
}

/// Whole-run report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub manifest: PathBuf,
    pub sections: Vec<SectionReport>,
    pub summary: AuditSummary,
}

impl AuditReport {
    pub fn new(manifest: &Path, sections: Vec<SectionReport>) -> Self {
        let mut summary = AuditSummary::default();
        for section in &sections {
            if section.missing {
                summary.missing_sections += 1;
            }
            for package in &section.packages {
                summary.packages += 1;
                summary.findings += package.issue_count();
                if package.is_skipped() {
                    summary.skipped += 1;
                }
            }
        }

        Self {
            manifest: manifest.to_path_buf(),
            sections,
            summary,
        }
    }

    pub fn packages(&self) -> impl Iterator<Item = &PackageReport> {
        self.sections.iter().flat_map(|s| s.packages.iter())
    }
}
