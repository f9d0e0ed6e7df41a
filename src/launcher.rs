// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use log::{debug, info};

use crate::errors::SrrError;
use crate::platform::Platform;

#[cfg(windows)]
const PATH_SEPARATOR: &str = ";";
#[cfg(not(windows))]
const PATH_SEPARATOR: &str = ":";

/// `install_dir` followed by every entry of `current` (normally the value of `PATH`).
pub fn search_path_with(install_dir: &Path, current: Option<OsString>) -> OsString {
    let mut joined = OsString::from(install_dir.as_os_str());
    if let Some(current) = current {
        joined.push(PATH_SEPARATOR);
        joined.push(current);
    }
    joined
}

/// Starts `script` through the platform's interpreter and returns the child's pid. The child
/// inherits this process's environment with `install_dir` in front of `PATH`, runs in
/// `work_dir`, and is never waited on.
pub fn launch_script(
    script: &Path,
    work_dir: &Path,
    install_dir: &Path,
    platform: Platform,
) -> Result<u32, SrrError> {
    let path_var = search_path_with(install_dir, env::var_os("PATH"));
    debug!("Child PATH: {:?}", path_var);

    let (program, lead_args) = platform.dialect().interpreter();
    let child = Command::new(program)
        .args(lead_args)
        .arg(script)
        .current_dir(work_dir)
        .env("PATH", path_var)
        .stdin(Stdio::null())
        .spawn()
        .map_err(SrrError::Spawn)?;

    let pid = child.id();
    info!("Launched {} {} (pid {})", program, script.display(), pid);
    // Dropping a Child neither kills nor waits for it.
    drop(child);
    Ok(pid)
}
