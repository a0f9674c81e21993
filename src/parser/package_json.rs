//! package.json parser

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::parser::error::ManifestError;
use crate::parser::types::{ManifestEntry, Section};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<IndexMap<String, Value>>,
    #[serde(default)]
    dev_dependencies: Option<IndexMap<String, Value>>,
}

/// A loaded package.json, keeping declaration order within each section
#[derive(Debug)]
pub struct Manifest {
    path: PathBuf,
    document: PackageJson,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest content; `path` is only used for reporting
    pub fn parse(path: impl AsRef<Path>, content: &str) -> Result<Self, ManifestError> {
        let path = path.as_ref().to_path_buf();
        let document = serde_json::from_str(content).map_err(|source| ManifestError::Json {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, document })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries of a section, or `None` if the field is missing or empty
    pub fn entries(&self, section: Section) -> Option<Vec<ManifestEntry>> {
        let fields = match section {
            Section::Dependencies => self.document.dependencies.as_ref(),
            Section::DevDependencies => self.document.dev_dependencies.as_ref(),
        }?;

        if fields.is_empty() {
            debug!("Section {} is empty in {}", section, self.path.display());
            return None;
        }

        Some(
            fields
                .iter()
                .map(|(name, value)| ManifestEntry {
                    name: name.clone(),
                    raw_range: range_text(value),
                    section,
                })
                .collect(),
        )
    }
}

// Non-string values are kept verbatim so the range parser can reject them
fn range_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(content: &str) -> Manifest {
        Manifest::parse("package.json", content).unwrap()
    }

    fn names_and_ranges(entries: &[ManifestEntry]) -> Vec<(&str, &str)> {
        entries
            .iter()
            .map(|e| (e.name.as_str(), e.raw_range.as_str()))
            .collect()
    }

    #[test]
    fn entries_preserve_declaration_order() {
        let manifest = manifest(
            r#"{
                "name": "my-app",
                "dependencies": {
                    "react": "^18.2.0",
                    "@types/node": "~20.1.0",
                    "axios": "1.6.0"
                }
            }"#,
        );

        let entries = manifest.entries(Section::Dependencies).unwrap();

        assert_eq!(
            names_and_ranges(&entries),
            vec![
                ("react", "^18.2.0"),
                ("@types/node", "~20.1.0"),
                ("axios", "1.6.0")
            ]
        );
        assert!(entries.iter().all(|e| e.section == Section::Dependencies));
    }

    #[test]
    fn entries_read_dev_dependencies() {
        let manifest = manifest(
            r#"{
                "dependencies": {"react": "^18.2.0"},
                "devDependencies": {"typescript": "^5.0.0"}
            }"#,
        );

        let entries = manifest.entries(Section::DevDependencies).unwrap();

        assert_eq!(names_and_ranges(&entries), vec![("typescript", "^5.0.0")]);
        assert_eq!(entries[0].section, Section::DevDependencies);
    }

    #[test]
    fn entries_return_none_for_missing_or_empty_section() {
        let missing = manifest(r#"{"dependencies": {"react": "^18.2.0"}}"#);
        let empty = manifest(r#"{"devDependencies": {}}"#);
        let null = manifest(r#"{"devDependencies": null}"#);

        assert!(missing.entries(Section::DevDependencies).is_none());
        assert!(empty.entries(Section::DevDependencies).is_none());
        assert!(null.entries(Section::DevDependencies).is_none());
    }

    #[test]
    fn entries_keep_non_string_values_as_text() {
        let manifest = manifest(r#"{"dependencies": {"weird": {"version": "1.0.0"}}}"#);

        let entries = manifest.entries(Section::Dependencies).unwrap();

        assert_eq!(entries[0].raw_range, r#"{"version":"1.0.0"}"#);
        assert!(entries[0].requirement().is_err());
    }

    #[test]
    fn parse_fails_on_invalid_json() {
        let result = Manifest::parse("package.json", "{ not json");
        assert!(matches!(result, Err(ManifestError::Json { .. })));
    }

    #[test]
    fn parse_fails_when_section_is_not_an_object() {
        let result = Manifest::parse("package.json", r#"{"dependencies": ["react"]}"#);
        assert!(matches!(result, Err(ManifestError::Json { .. })));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let result = Manifest::load("/nonexistent/dir/package.json");
        assert!(matches!(result, Err(ManifestError::Io { .. })));
    }
}
