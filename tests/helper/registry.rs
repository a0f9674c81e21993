//! Registry test utilities

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use semver::Version;

use deps_audit::version::error::RegistryError;
use deps_audit::version::registry::Registry;
use deps_audit::version::semver::parse_version;
use deps_audit::version::types::{Advisory, DependencyEdge, PackageVersions, VersionMetadata};

/// In-memory registry for testing
///
/// Packages without versions exist but fail the version lookup; metadata and
/// dependencies default to empty unless registered.
#[derive(Default)]
pub struct StubRegistry {
    versions: HashMap<String, Option<Vec<String>>>,
    metadata: HashMap<(String, String), VersionMetadata>,
    dependencies: HashMap<(String, String), Option<Vec<DependencyEdge>>>,
    calls: Mutex<Vec<String>>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, package: &str, versions: Vec<&str>) -> Self {
        self.versions.insert(
            package.to_string(),
            Some(versions.into_iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    /// Register a package whose version list cannot be fetched
    pub fn without_versions(mut self, package: &str) -> Self {
        self.versions.insert(package.to_string(), None);
        self
    }

    pub fn with_metadata(
        mut self,
        package: &str,
        version: &str,
        metadata: VersionMetadata,
    ) -> Self {
        self.metadata
            .insert((package.to_string(), version.to_string()), metadata);
        self
    }

    pub fn with_dependencies(
        mut self,
        package: &str,
        version: &str,
        dependencies: Vec<DependencyEdge>,
    ) -> Self {
        self.dependencies
            .insert((package.to_string(), version.to_string()), Some(dependencies));
        self
    }

    /// Register a version whose dependency list cannot be fetched
    pub fn without_dependencies(mut self, package: &str, version: &str) -> Self {
        self.dependencies
            .insert((package.to_string(), version.to_string()), None);
        self
    }

    /// Calls made so far, as `method:package`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &str, package: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("{}:{}", method, package));
    }
}

#[async_trait]
impl Registry for StubRegistry {
    async fn package_exists(&self, package_name: &str) -> Result<bool, RegistryError> {
        self.record("exists", package_name);
        Ok(self.versions.contains_key(package_name))
    }

    async fn list_versions(&self, package_name: &str) -> Result<PackageVersions, RegistryError> {
        self.record("versions", package_name);
        match self.versions.get(package_name) {
            Some(Some(versions)) => Ok(PackageVersions::new(
                versions.iter().map(|v| parse_version(v).unwrap()).collect(),
            )),
            _ => Err(RegistryError::NotFound(package_name.to_string())),
        }
    }

    async fn version_metadata(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<VersionMetadata, RegistryError> {
        self.record("metadata", package_name);
        Ok(self
            .metadata
            .get(&(package_name.to_string(), version.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn version_dependencies(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<Vec<DependencyEdge>, RegistryError> {
        self.record("dependencies", package_name);
        match self
            .dependencies
            .get(&(package_name.to_string(), version.to_string()))
        {
            Some(Some(deps)) => Ok(deps.clone()),
            Some(None) => Err(RegistryError::InvalidResponse("unavailable".to_string())),
            None => Ok(vec![]),
        }
    }
}

pub fn advisory(package: &str, version: &str, severity: &str, title: &str) -> Advisory {
    Advisory {
        severity: severity.to_string(),
        title: title.to_string(),
        package: package.to_string(),
        version: version.to_string(),
    }
}
