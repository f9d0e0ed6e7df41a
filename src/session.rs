// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SrrError;

pub const SESSION_VERSION: u32 = 1;
pub const SESSION_FILE_NAME: &str = ".srrprocessor-session.json";

// What Generate leaves behind for Run. `script_path` is None until a script has been written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub output_directory: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionFile {
    pub version: u32,
    pub output_directory: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

impl From<&Session> for SessionFile {
    fn from(session: &Session) -> Self {
        SessionFile {
            version: SESSION_VERSION,
            output_directory: session.output_directory.clone(),
            script_path: session.script_path.clone(),
        }
    }
}

impl Session {
    pub fn has_script(&self) -> bool {
        self.script_path.is_some()
    }

    // A missing file is an empty session, not an error.
    pub fn load(path: &Path) -> Result<Session, SrrError> {
        if !path.exists() {
            debug!("No session file at {}", path.display());
            return Ok(Session::default());
        }
        let text = std::fs::read_to_string(path)?;
        let file: SessionFile = serde_json::from_str(&text)?;
        if file.version != SESSION_VERSION {
            return Err(SrrError::Input(format!(
                "Unsupported session version {} in {}",
                file.version,
                path.display()
            )));
        }
        Ok(Session {
            output_directory: file.output_directory,
            script_path: file.script_path,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), SrrError> {
        let text = serde_json::to_string_pretty(&SessionFile::from(self))?;
        std::fs::write(path, text)?;
        debug!("Saved session to {}", path.display());
        Ok(())
    }
}

pub fn default_session_path() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home).join(SESSION_FILE_NAME),
        _ => PathBuf::from(SESSION_FILE_NAME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("srr-processor-session-{}-{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn test_missing_file_is_empty_session() {
        let path = scratch("missing");
        std::fs::remove_file(&path).ok();
        let session = Session::load(&path).unwrap();
        assert!(!session.has_script());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch("saved");
        let session = Session {
            output_directory: Some(PathBuf::from("/tmp/out")),
            script_path: Some(PathBuf::from("/tmp/out/process_srr.sh")),
        };
        session.save(&path).unwrap();
        let loaded = Session::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, session);
        assert!(loaded.has_script());
    }

    #[test]
    fn test_wrong_version_rejected() {
        let path = scratch("version");
        std::fs::write(
            &path,
            r#"{"version": 99, "output_directory": null, "script_path": null}"#,
        )
        .unwrap();
        let err = Session::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("Unsupported session version 99"));
    }

    #[test]
    fn test_garbage_is_json_error() {
        let path = scratch("garbage");
        std::fs::write(&path, "not json").unwrap();
        let err = Session::load(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SrrError::Json(_)));
    }
}
