//! Command-line surface

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::audit::output::OutputFormat;
use crate::config::AuditConfig;
use crate::parser::types::Section;
use crate::version::matcher::ResolutionPolicy;

/// Resolve the version ranges declared in a package.json against the deps.dev
/// registry and report deprecations and security advisories for the resolved
/// versions and their direct dependencies.
///
/// The legacy flags `-dd`, `-all` and `-?` are accepted as aliases for
/// `--dev-dependencies`, `--all` and `--help`.
#[derive(Parser, Debug)]
#[command(name = "deps-audit", version, about)]
pub struct Cli {
    /// Path to the manifest
    #[arg(value_name = "MANIFEST", default_value = "package.json")]
    pub manifest: PathBuf,

    /// Audit "dependencies" (default)
    #[arg(short = 'd', long = "dependencies")]
    pub dependencies: bool,

    /// Audit "devDependencies"
    #[arg(long = "dev-dependencies")]
    pub dev_dependencies: bool,

    /// Audit "dependencies" and "devDependencies"
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Select the highest satisfying version instead of the lowest
    #[arg(long)]
    pub highest: bool,

    /// Ignore pre-release versions unless the range itself names one
    #[arg(long)]
    pub exclude_prerelease: bool,

    /// Maximum number of packages resolved at the same time
    #[arg(short = 'j', long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Registry base URL
    #[arg(long, value_name = "URL", env = "DEPS_AUDIT_REGISTRY_URL")]
    pub registry_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Config file (defaults to $XDG_CONFIG_HOME/deps-audit/config.json if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments, accepting the legacy single-dash flags
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Sections to audit: `--all` wins over `--dev-dependencies`, which wins over `-d`
    pub fn sections(&self) -> Vec<Section> {
        if self.all {
            vec![Section::Dependencies, Section::DevDependencies]
        } else if self.dev_dependencies {
            vec![Section::DevDependencies]
        } else {
            vec![Section::Dependencies]
        }
    }

    /// Layer command-line overrides on top of file configuration
    pub fn apply_to(&self, mut config: AuditConfig) -> AuditConfig {
        if let Some(url) = &self.registry_url {
            config.registry.base_url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.registry.timeout_ms = timeout_ms;
        }
        if let Some(concurrency) = self.concurrency {
            config.resolution.concurrency = concurrency;
        }
        if self.highest {
            config.resolution.policy = ResolutionPolicy::Highest;
        }
        if self.exclude_prerelease {
            config.resolution.include_prerelease = false;
        }
        config
    }
}

/// Rewrite legacy single-dash flags into their long forms
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-dd") => OsString::from("--dev-dependencies"),
            Some("-all") => OsString::from("--all"),
            Some("-?") => OsString::from("--help"),
            _ => arg,
        })
        .collect()
}
