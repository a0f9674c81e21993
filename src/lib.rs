//! Resolve the version ranges declared in a package manifest and report
//! deprecation and advisory metadata for the resolved versions.
//!
//! # Modules
//!
//! - [`version`]: Semantic versions, range expressions and registry access
//! - [`parser`]: package.json loading
//! - [`audit`]: Resolution pipeline, findings and report rendering
//! - [`config`]: Configuration file and defaults
//! - [`cli`]: Command-line surface
//! - [`logging`]: Tracing subscriber setup

pub mod audit;
pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod version;
