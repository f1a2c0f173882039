//! Unit tests, grouped by module.

mod io;

use std::path::PathBuf;

/// Write `bytes` to `name` inside `dir` and return the path.
pub(crate) fn write_fixture(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).expect("write fixture");
    path
}
