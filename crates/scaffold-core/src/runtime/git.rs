//! git detection and repository initialization

use crate::error::ScaffoldError;
use std::path::Path;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    let output = Command::new("git").arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: "git",
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: "git",
            version: None,
            available: false,
        },
    }
}

/// Fail when git is missing; the pipeline cannot finish without it
pub fn ensure_git() -> Result<RuntimeInfo, ScaffoldError> {
    let info = check_git();
    if info.available {
        Ok(info)
    } else {
        Err(ScaffoldError::GitUnavailable)
    }
}

/// Initialize an empty git repository rooted at `dir`
pub async fn init_repository(dir: &Path) -> Result<(), ScaffoldError> {
    let output = tokio::process::Command::new("git")
        .arg("init")
        .current_dir(dir)
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScaffoldError::GitUnavailable
            } else {
                ScaffoldError::Io(e)
            }
        })?;

    if !output.status.success() {
        return Err(ScaffoldError::GitInit {
            dir: dir.to_path_buf(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
