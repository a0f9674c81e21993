use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use deps_audit::audit::output::OutputWriter;
use deps_audit::audit::pipeline::Auditor;
use deps_audit::audit::run_audit;
use deps_audit::cli::Cli;
use deps_audit::config::AuditConfig;
use deps_audit::logging::init_tracing;
use deps_audit::parser::Manifest;
use deps_audit::version::registries::DepsDevRegistry;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let config = cli.apply_to(AuditConfig::load(cli.config.as_deref())?);
    debug!("Using configuration {:?}", config);

    // Manifest failures abort before any package is resolved
    let manifest = Manifest::load(&cli.manifest)?;

    let registry = DepsDevRegistry::new(
        &config.registry.base_url,
        config.timeout(),
        &config.registry.user_agent,
    )
    .context("Failed to create HTTP client")?;
    let auditor = Auditor::new(Arc::new(registry), config.audit_options());

    let report = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run_audit(&manifest, &cli.sections(), &auditor));

    OutputWriter::new(cli.format).render(&report)?;
    Ok(())
}
