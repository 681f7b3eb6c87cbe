use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Drops an executable shell script into `dir` to stand in for the external
/// compiler binary during tests.
pub fn write_script(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("could not write fixture script");

    let mut permissions = fs::metadata(&path)
        .expect("could not stat fixture script")
        .permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).expect("could not mark fixture script executable");

    path
}
