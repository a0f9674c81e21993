//! Version layer for resolving declared ranges against published versions
//!
//! This module provides the semantic version model, the range grammar, version
//! selection, and the remote registry that supplies version lists and
//! advisory metadata.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Matcher   │◀────│    Range    │
//! │  (fetch)    │     │  (select)   │     │  (^, ~, =)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       │
//!        ▼                                       ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │ Registries  │                         │   Semver    │
//! │ (deps.dev)  │                         │ (parse/cmp) │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`semver`]: Version parsing and build-agnostic ordering
//! - [`range`]: Exact, tilde and caret range expressions
//! - [`matcher`]: Selecting a version from an ascending list
//! - [`registry`]: Registry trait for fetching package metadata
//! - [`registries`]: Concrete registry implementations (deps.dev)
//! - [`error`]: Error types for versions, ranges and registry operations
//! - [`types`]: Common types like `PackageVersions` and `Advisory`

pub mod error;
pub mod matcher;
pub mod range;
pub mod registries;
pub mod registry;
pub mod semver;
pub mod types;
