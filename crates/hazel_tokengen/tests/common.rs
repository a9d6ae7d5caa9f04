use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The grammar all integration tests generate from
pub fn fixture_grammar() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("Tokens")
}

/// Writes a grammar into a fresh scratch directory, returning the directory and the grammar path
pub fn scratch_grammar(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("could not create scratch directory");
    let path = dir.path().join("Tokens");
    std::fs::write(&path, source).expect("could not write grammar");
    (dir, path)
}
