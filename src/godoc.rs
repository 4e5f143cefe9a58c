//! Run `go doc -all` to obtain a package listing.

use crate::error::GoDocError;
use std::process::Command;

/// Fetch the full listing for a package path.
///
/// On a non-zero exit the error carries stdout and stderr combined, which
/// is where `go doc` explains what went wrong.
pub fn fetch(pkg_path: &str) -> Result<String, GoDocError> {
    tracing::debug!(path = pkg_path, "running go doc -all");
    let output = Command::new("go")
        .args(["doc", "-all", pkg_path])
        .output()
        .map_err(|source| GoDocError::Spawn { source })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    if !output.status.success() {
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(GoDocError::Failed { output: combined });
    }
    Ok(combined)
}
