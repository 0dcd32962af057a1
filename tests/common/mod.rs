use std::fs;
use std::path::{Path, PathBuf};

const UPDATE_VAR: &str = "INDEXED_TREE_UPDATE_SNAPSHOTS";

fn snapshot_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/snapshots")
        .join(name)
}

/// Compare `actual` with `tests/snapshots/<name>`; rewrite it when `UPDATE_VAR` is set.
pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_path(name);
    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|_| panic!("snapshot {} not found", path.display()))
        .replace("\r\n", "\n");
    assert_eq!(
        expected,
        actual,
        "snapshot {} differs; rerun with {}=1 to accept",
        path.display(),
        UPDATE_VAR
    );
}
