//! Resolution pipeline for manifest entries
//!
//! Each entry moves through `Start -> VersionsFetched -> Resolved -> Reported`,
//! leaving early as `Skipped` when the registry has no data or no published
//! version satisfies the declared range. A skipped entry never affects the
//! others.

use std::sync::Arc;

use futures::StreamExt;
use futures::stream;
use tracing::{debug, info, warn};

use crate::audit::finding::{Finding, Outcome, SkipReason};
use crate::audit::report::PackageReport;
use crate::config::DEFAULT_CONCURRENCY;
use crate::parser::types::ManifestEntry;
use crate::version::matcher::{PrereleasePolicy, ResolutionPolicy, find_match};
use crate::version::registry::Registry;
use crate::version::semver::is_ascending;
use crate::version::types::DependencyEdge;

/// Settings that shape how entries are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditOptions {
    /// Maximum number of entries resolved at the same time
    pub concurrency: usize,
    pub resolution: ResolutionPolicy,
    pub prerelease: PrereleasePolicy,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            resolution: ResolutionPolicy::default(),
            prerelease: PrereleasePolicy::default(),
        }
    }
}

pub struct Auditor {
    registry: Arc<dyn Registry>,
    options: AuditOptions,
}

impl Auditor {
    pub fn new(registry: Arc<dyn Registry>, options: AuditOptions) -> Self {
        Self { registry, options }
    }

    /// Audit entries with bounded concurrency, returning reports in input order
    pub async fn audit_entries(&self, entries: &[ManifestEntry]) -> Vec<PackageReport> {
        stream::iter(entries)
            .map(|entry| self.audit_entry(entry))
            .buffered(self.options.concurrency.max(1))
            .collect()
            .await
    }

    /// Resolve one entry and collect its findings
    pub async fn audit_entry(&self, entry: &ManifestEntry) -> PackageReport {
        let mut report = PackageReport::new(entry);

        if let Err(reason) = self.resolve(entry, &mut report).await {
            info!("Skipping {}: {}", entry.name, reason);
            report.outcome = Outcome::Skipped { reason };
        }

        report
    }

    async fn resolve(
        &self,
        entry: &ManifestEntry,
        report: &mut PackageReport,
    ) -> Result<(), SkipReason> {
        let requirement = entry.requirement().map_err(|e| {
            debug!("Cannot parse range for {}: {}", entry.name, e);
            SkipReason::InvalidRange(entry.raw_range.clone())
        })?;
        let name = requirement.name.as_str();

        let exists = self
            .registry
            .package_exists(name)
            .await
            .inspect_err(|e| warn!("Failed to look up {}: {}", name, e))
            .unwrap_or(false);
        if !exists {
            return Err(SkipReason::NotFound);
        }

        let versions = self
            .registry
            .list_versions(name)
            .await
            .inspect_err(|e| warn!("Failed to fetch versions for {}: {}", name, e))
            .map_err(|_| SkipReason::NoVersions)?;
        if versions.is_empty() {
            return Err(SkipReason::NoVersions);
        }
        if !is_ascending(&versions.versions) {
            warn!("Versions for {} are not in ascending order", name);
        }
        debug!("Received {} versions for {}", versions.versions.len(), name);

        let resolved = find_match(
            &versions.versions,
            &requirement.range,
            self.options.resolution,
            self.options.prerelease,
        )
        .cloned()
        .ok_or(SkipReason::NoMatch)?;

        debug!("Resolved {} {} as {}", name, requirement.range, resolved);
        report.resolved_version = Some(resolved.clone());
        report.findings.push(Finding::Matched {
            range: entry.raw_range.clone(),
            version: resolved.to_string(),
        });

        let metadata = self
            .registry
            .version_metadata(name, &resolved)
            .await
            .inspect_err(|e| warn!("Failed to fetch metadata for {}@{}: {}", name, resolved, e))
            .map_err(|_| SkipReason::NoMetadata)?;

        if let Some(message) = metadata.deprecated {
            report.findings.push(Finding::Deprecated { message });
        }

        if !metadata.advisories.is_empty() {
            report.findings.push(Finding::Advisories {
                package: name.to_string(),
                version: resolved.to_string(),
                advisories: metadata.advisories,
            });
        }

        let dependencies = self
            .registry
            .version_dependencies(name, &resolved)
            .await
            .inspect_err(|e| {
                warn!(
                    "Failed to fetch dependencies for {}@{}: {}",
                    name, resolved, e
                )
            })
            .map_err(|_| SkipReason::NoDependencyData)?;

        for dependency in dependencies.into_iter().filter(DependencyEdge::has_advisories) {
            report.findings.push(Finding::DependencyAdvisories {
                package: name.to_string(),
                version: resolved.to_string(),
                dependency,
            });
        }

        Ok(())
    }
}
