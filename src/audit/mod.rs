//! Audit layer
//!
//! Drives the resolution pipeline over the selected manifest sections and
//! renders the accumulated findings.
//!
//! # Modules
//!
//! - [`pipeline`]: Per-entry resolution against the registry
//! - [`finding`]: Findings, skip reasons and outcomes
//! - [`report`]: Package, section and run-level reports
//! - [`output`]: Text and JSON rendering

pub mod finding;
pub mod output;
pub mod pipeline;
pub mod report;

use tracing::info;

use crate::audit::pipeline::Auditor;
use crate::audit::report::{AuditReport, SectionReport};
use crate::parser::package_json::Manifest;
use crate::parser::types::Section;

/// Audit every selected section of a manifest
///
/// A missing or empty section is recorded and the remaining sections still run.
pub async fn run_audit(
    manifest: &Manifest,
    sections: &[Section],
    auditor: &Auditor,
) -> AuditReport {
    let mut reports = Vec::with_capacity(sections.len());

    for &section in sections {
        let Some(entries) = manifest.entries(section) else {
            info!(
                "Property {} not found in {}",
                section,
                manifest.path().display()
            );
            reports.push(SectionReport::missing(section));
            continue;
        };

        info!("Auditing {} entries in {}", entries.len(), section);
        let packages = auditor.audit_entries(&entries).await;
        reports.push(SectionReport::audited(section, packages));
    }

    let report = AuditReport::new(manifest.path(), reports);
    info!(
        "Completed with {} findings / {} skipped packages",
        report.summary.findings, report.summary.skipped
    );
    report
}
