use std::cmp::Ordering;

use semver::Version;

use crate::version::error::VersionError;

/// Parse a `major.minor.patch[-prerelease][+build]` string.
///
/// Partial versions ("1", "1.2"), a leading `v` and leading zeros are rejected.
pub fn parse_version(text: &str) -> Result<Version, VersionError> {
    Version::parse(text.trim()).map_err(|source| VersionError::Invalid {
        input: text.to_string(),
        source,
    })
}

/// Total order over versions that ignores build metadata.
///
/// Numeric triple first, then pre-release: a version with a pre-release sorts
/// before the same triple without one, and identifiers compare field by field
/// (numeric fields numerically, others lexically).
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    triple(a)
        .cmp(&triple(b))
        .then_with(|| a.pre.cmp(&b.pre))
}

/// The numeric `(major, minor, patch)` part of a version.
pub fn triple(version: &Version) -> (u64, u64, u64) {
    (version.major, version.minor, version.patch)
}

/// Whether `versions` is ascending (ties allowed) under [`compare_versions`].
pub fn is_ascending(versions: &[Version]) -> bool {
    versions
        .windows(2)
        .all(|pair| compare_versions(&pair[0], &pair[1]) != Ordering::Greater)
}
