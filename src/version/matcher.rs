//! Version selection against a published version list

use semver::Version;
use serde::{Deserialize, Serialize};

use crate::version::range::RangeExpression;

/// How pre-release candidates are treated by tilde and caret ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrereleasePolicy {
    /// Compare the numeric triple only
    #[default]
    Include,
    /// Reject pre-releases unless the range base is a pre-release of the same triple
    Exclude,
}

/// Which satisfying version is selected from the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// The first (lowest) satisfying version
    #[default]
    Lowest,
    /// The last (highest) satisfying version
    Highest,
}

/// Pick a version from an ascending list.
///
/// The list is scanned in the order given and never re-sorted.
pub fn find_match<'a>(
    versions: &'a [Version],
    range: &RangeExpression,
    resolution: ResolutionPolicy,
    prerelease: PrereleasePolicy,
) -> Option<&'a Version> {
    let satisfies = |v: &&Version| range.matches(v, prerelease);
    match resolution {
        ResolutionPolicy::Lowest => versions.iter().find(satisfies),
        ResolutionPolicy::Highest => versions.iter().rev().find(satisfies),
    }
}
