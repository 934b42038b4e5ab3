use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn get_test_fixture_path(language: &str, fixture_name: Option<&str>) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(language);
    match fixture_name {
        Some(fixture_name) => base.join(fixture_name),
        None => base,
    }
}

/// Copies a flat fixture project into a fresh temporary workspace, so tests
/// can write `.vscode/` next to it.
#[allow(dead_code)]
pub fn copy_fixture_workspace(language: &str, fixture_name: &str) -> (TempDir, PathBuf) {
    let source = get_test_fixture_path(language, Some(fixture_name));
    let temp_dir = TempDir::new().unwrap();
    let root = fs::canonicalize(temp_dir.path()).unwrap();

    for entry in fs::read_dir(&source).unwrap() {
        let entry = entry.unwrap();
        if entry.path().is_file() {
            fs::copy(entry.path(), root.join(entry.file_name())).unwrap();
        }
    }

    (temp_dir, root)
}

/// Zero-based line of the first line containing `needle`.
#[allow(dead_code)]
pub fn line_of(path: &std::path::Path, needle: &str) -> usize {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not in {}", path.display()))
}
