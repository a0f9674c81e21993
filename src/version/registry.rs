//! Registry trait for fetching package metadata from a remote source

#[cfg(test)]
use mockall::automock;

use semver::Version;

use crate::version::error::RegistryError;
use crate::version::types::{DependencyEdge, PackageVersions, VersionMetadata};

/// Trait for the remote metadata service
///
/// Every call is a read. Callers treat any error as "no data" for that
/// package and move on.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Whether the registry knows the package at all
    async fn package_exists(&self, package_name: &str) -> Result<bool, RegistryError>;

    /// Fetches all published versions for a package
    ///
    /// # Returns
    /// * `Ok(PackageVersions)` - Versions ordered from oldest to newest
    /// * `Err(RegistryError)` - If the fetch fails
    async fn list_versions(&self, package_name: &str) -> Result<PackageVersions, RegistryError>;

    /// Deprecation notice and advisories for one version
    async fn version_metadata(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<VersionMetadata, RegistryError>;

    /// Dependencies of one version, each with its own advisories
    async fn version_dependencies(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<Vec<DependencyEdge>, RegistryError>;
}
