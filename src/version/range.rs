//! Range expressions over semantic versions
//!
//! Supports the three range forms found in package manifests:
//! - `1.2.3` - exact match
//! - `~1.2.3` - patch-level changes (>=1.2.3 <1.3.0)
//! - `^1.2.3` - changes that keep the leftmost non-zero component
//!   (>=1.2.3 <2.0.0, ^0.2.3 is <0.3.0, ^0.0.3 is <0.0.4)
//!
//! The operator is decided once at parse time.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use semver::Version;
use serde::{Serialize, Serializer};

use crate::version::error::RangeError;
use crate::version::matcher::PrereleasePolicy;
use crate::version::semver::{compare_versions, parse_version, triple};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeExpression {
    Exact(Version),
    Tilde(Version),
    Caret(Version),
}

impl RangeExpression {
    /// The version the range is anchored on
    pub fn base(&self) -> &Version {
        match self {
            RangeExpression::Exact(v) | RangeExpression::Tilde(v) | RangeExpression::Caret(v) => v,
        }
    }

    /// Exclusive upper bound of the numeric triple
    ///
    /// `None` for exact ranges, and for tilde or caret ranges whose bound does
    /// not fit in `u64` (nothing above the base is excluded then).
    pub fn upper_bound(&self) -> Option<(u64, u64, u64)> {
        match self {
            RangeExpression::Exact(_) => None,
            RangeExpression::Tilde(v) => next_minor(v.major, v.minor),
            RangeExpression::Caret(v) => {
                if v.major > 0 {
                    next_major(v.major)
                } else if v.minor > 0 {
                    next_minor(0, v.minor)
                } else {
                    next_patch(0, 0, v.patch)
                }
            }
        }
    }

    /// Check if a concrete version satisfies this range
    ///
    /// Exact ranges compare full identity (pre-release included, build ignored).
    /// Tilde and caret ranges compare the numeric triple against their bounds.
    pub fn matches(&self, version: &Version, prerelease: PrereleasePolicy) -> bool {
        if prerelease == PrereleasePolicy::Exclude && !self.admits_prerelease_of(version) {
            return false;
        }

        match self {
            RangeExpression::Exact(base) => compare_versions(version, base) == Ordering::Equal,
            RangeExpression::Tilde(base) | RangeExpression::Caret(base) => {
                let candidate = triple(version);
                candidate >= triple(base)
                    && self.upper_bound().is_none_or(|upper| candidate < upper)
            }
        }
    }

    // A pre-release candidate is only admitted when the base is a pre-release
    // of the same triple.
    fn admits_prerelease_of(&self, version: &Version) -> bool {
        let base = self.base();
        version.pre.is_empty() || (!base.pre.is_empty() && triple(base) == triple(version))
    }

    fn operator(&self) -> &'static str {
        match self {
            RangeExpression::Exact(_) => "",
            RangeExpression::Tilde(_) => "~",
            RangeExpression::Caret(_) => "^",
        }
    }
}

fn next_major(major: u64) -> Option<(u64, u64, u64)> {
    major.checked_add(1).map(|major| (major, 0, 0))
}

// An overflowing component carries into the next one up.
fn next_minor(major: u64, minor: u64) -> Option<(u64, u64, u64)> {
    match minor.checked_add(1) {
        Some(minor) => Some((major, minor, 0)),
        None => next_major(major),
    }
}

fn next_patch(major: u64, minor: u64, patch: u64) -> Option<(u64, u64, u64)> {
    match patch.checked_add(1) {
        Some(patch) => Some((major, minor, patch)),
        None => next_minor(major, minor),
    }
}

impl FromStr for RangeExpression {
    type Err = RangeError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(RangeError::Empty);
        }

        let unsupported = |source| RangeError::Unsupported {
            input: spec.to_string(),
            source,
        };

        if let Some(rest) = spec.strip_prefix('^') {
            parse_version(rest)
                .map(RangeExpression::Caret)
                .map_err(unsupported)
        } else if let Some(rest) = spec.strip_prefix('~') {
            parse_version(rest)
                .map(RangeExpression::Tilde)
                .map_err(unsupported)
        } else {
            parse_version(spec)
                .map(RangeExpression::Exact)
                .map_err(unsupported)
        }
    }
}

impl fmt::Display for RangeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator(), self.base())
    }
}

impl Serialize for RangeExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
