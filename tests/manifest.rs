use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use deps_audit::parser::{Manifest, ManifestError, Section};

#[test]
fn load_reads_manifest_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"name": "app", "devDependencies": {{"jest": "^29.0.0", "eslint": "~8.50.0"}}}}"#
    )
    .unwrap();

    let manifest = Manifest::load(file.path()).unwrap();
    let entries = manifest.entries(Section::DevDependencies).unwrap();

    assert_eq!(manifest.path(), file.path());
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].name, "jest");
    assert_eq!(entries[1].raw_range, "~8.50.0");
    assert!(manifest.entries(Section::Dependencies).is_none());
}

#[test]
fn load_fails_for_unreadable_manifest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("package.json");

    let result = Manifest::load(&path);

    assert!(matches!(result, Err(ManifestError::Io { .. })));
}

#[test]
fn load_fails_for_undecodable_manifest() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[1, 2, 3]").unwrap();

    let result = Manifest::load(file.path());

    match result {
        Err(err @ ManifestError::Json { .. }) => {
            assert!(err.to_string().starts_with("Cannot parse"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
