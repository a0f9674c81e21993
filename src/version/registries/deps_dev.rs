//! deps.dev npm metadata API implementation

use std::time::Duration;

use semver::Version;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::version::error::RegistryError;
use crate::version::registry::Registry;
use crate::version::semver::{compare_versions, parse_version};
use crate::version::types::{Advisory, DependencyEdge, PackageVersions, VersionMetadata};

/// Default base URL for the deps.dev npm endpoints
pub const DEFAULT_BASE_URL: &str = "https://deps.dev/_/s/npm/p";

#[derive(Debug, Deserialize)]
struct VersionsResponse {
    #[serde(default)]
    versions: Vec<VersionEntry>,
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    version: String,
}

#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: VersionDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VersionDetail {
    deprecated: Option<String>,
    advisories: Vec<AdvisoryEntry>,
}

#[derive(Debug, Deserialize)]
struct AdvisoryEntry {
    #[serde(default)]
    severity: String,
    #[serde(default)]
    title: String,
}

#[derive(Debug, Deserialize)]
struct DependenciesResponse {
    #[serde(default)]
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
struct DependencyEntry {
    package: PackageRef,
    #[serde(default)]
    version: String,
    #[serde(default)]
    advisories: Vec<AdvisoryEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageRef {
    name: String,
}

impl AdvisoryEntry {
    fn into_advisory(self, package: &str, version: &str) -> Advisory {
        Advisory {
            severity: self.severity,
            title: self.title,
            package: package.to_string(),
            version: version.to_string(),
        }
    }
}

/// Registry implementation for the deps.dev npm API
pub struct DepsDevRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl DepsDevRegistry {
    /// Creates a new DepsDevRegistry; every request is bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn package_url(&self, package_name: &str) -> String {
        format!("{}/{}", self.base_url, encode_package_name(package_name))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        package_name: &str,
    ) -> Result<T, RegistryError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package_name.to_string()));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("deps.dev returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        response.json().await.map_err(|e| {
            warn!("Failed to parse deps.dev response from {}: {}", url, e);
            RegistryError::InvalidResponse(e.to_string())
        })
    }
}

/// Escape a package name for use as a single path segment
///
/// Scoped packages: `@scope/name` -> `%40scope%2Fname`
pub fn encode_package_name(package_name: &str) -> String {
    package_name.replace('@', "%40").replace('/', "%2F")
}

/// Reverse of [`encode_package_name`]
pub fn decode_package_name(encoded: &str) -> String {
    encoded.replace("%2F", "/").replace("%40", "@")
}

#[async_trait::async_trait]
impl Registry for DepsDevRegistry {
    async fn package_exists(&self, package_name: &str) -> Result<bool, RegistryError> {
        let url = format!("{}/v/", self.package_url(package_name));
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !status.is_success() {
            warn!("deps.dev returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        Ok(true)
    }

    async fn list_versions(&self, package_name: &str) -> Result<PackageVersions, RegistryError> {
        let url = format!("{}/versions", self.package_url(package_name));
        let response: VersionsResponse = self.get_json(&url, package_name).await?;

        // Sort versions by semver (lowest first, highest last)
        let mut versions: Vec<Version> = response
            .versions
            .into_iter()
            .filter_map(|entry| {
                parse_version(&entry.version)
                    .inspect_err(|e| debug!("Skipping version of {}: {}", package_name, e))
                    .ok()
            })
            .collect();

        versions.sort_by(compare_versions);

        Ok(PackageVersions::new(versions))
    }

    async fn version_metadata(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<VersionMetadata, RegistryError> {
        let url = format!("{}/v/{}", self.package_url(package_name), version);
        let response: VersionResponse = self.get_json(&url, package_name).await?;
        let detail = response.version;
        let version = version.to_string();

        Ok(VersionMetadata {
            deprecated: detail.deprecated.filter(|message| !message.trim().is_empty()),
            advisories: detail
                .advisories
                .into_iter()
                .map(|adv| adv.into_advisory(package_name, &version))
                .collect(),
        })
    }

    async fn version_dependencies(
        &self,
        package_name: &str,
        version: &Version,
    ) -> Result<Vec<DependencyEdge>, RegistryError> {
        let url = format!("{}/v/{}/dependencies", self.package_url(package_name), version);
        let response: DependenciesResponse = self.get_json(&url, package_name).await?;

        Ok(response
            .dependencies
            .into_iter()
            .map(|dep| {
                let name = dep.package.name;
                let advisories = dep
                    .advisories
                    .into_iter()
                    .map(|adv| adv.into_advisory(&name, &dep.version))
                    .collect();
                DependencyEdge {
                    package: name,
                    version: dep.version,
                    advisories,
                }
            })
            .collect())
    }
}
