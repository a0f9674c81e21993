//! Output formatting for text vs JSON rendering
//!
//! Reports flow through [`OutputWriter`], which handles format switching so
//! the rest of the crate never branches on the output format.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::audit::finding::{Finding, Outcome};
use crate::audit::report::{AuditReport, PackageReport};

/// Output format for the audit report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-oriented human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Human-readable text rendering
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> io::Result<()>;
}

pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render a payload to stdout
    pub fn render<T: Render + Serialize>(&self, payload: &T) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(payload, &mut handle)
    }

    /// Render a payload to an arbitrary writer
    pub fn render_to<T: Render + Serialize>(
        &self,
        payload: &T,
        w: &mut dyn Write,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => payload.render_text(w)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, payload)?;
                writeln!(w)?;
            }
        }
        w.flush()
    }
}

impl Render for PackageReport {
    fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(w, "{}: {}", self.name, self.range)?;

        for finding in &self.findings {
            match finding {
                Finding::Matched { range, version } => {
                    writeln!(w, ".. matching {} as {}", range, version)?;
                }
                Finding::Deprecated { message } => {
                    writeln!(w, ".. {}", message)?;
                }
                Finding::Advisories {
                    package,
                    version,
                    advisories,
                } => {
                    writeln!(w, ".. package {} version {} has advisories:", package, version)?;
                    for adv in advisories {
                        writeln!(w, ".... {} - {}", adv.severity, adv.title)?;
                    }
                }
                Finding::DependencyAdvisories {
                    package,
                    version,
                    dependency,
                } => {
                    writeln!(
                        w,
                        ".. package {} version {} dependencies have advisories:",
                        package, version
                    )?;
                    for adv in &dependency.advisories {
                        writeln!(
                            w,
                            ".... {} v {}: {} - {}",
                            dependency.package, dependency.version, adv.severity, adv.title
                        )?;
                    }
                }
            }
        }

        if let Outcome::Skipped { reason } = &self.outcome {
            writeln!(w, ".. {}", reason)?;
        }

        Ok(())
    }
}

impl Render for AuditReport {
    fn render_text(&self, w: &mut dyn Write) -> io::Result<()> {
        for section in &self.sections {
            if section.missing {
                writeln!(
                    w,
                    "Property {} not found in {}",
                    section.section,
                    self.manifest.display()
                )?;
                continue;
            }
            for package in &section.packages {
                package.render_text(w)?;
            }
        }

        writeln!(
            w,
            "completed with {} findings / {} skipped packages",
            self.summary.findings, self.summary.skipped
        )
    }
}
