// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::SrrError;
use crate::job::DEFAULT_THREADS;

pub const CONFIG_FILE_NAME: &str = ".srrprocessorconfig";

// Settings read from .srrprocessorconfig (JSON). Unknown keys are ignored and keys of the wrong
// type are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_threads: String,
    pub tools_bin_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_threads: String::from(DEFAULT_THREADS),
            tools_bin_dir: None,
        }
    }
}

impl Config {
    pub fn from_value(value: &Value) -> Config {
        let default_threads = match value.get("default_threads") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::from(DEFAULT_THREADS),
        };
        let tools_bin_dir = value
            .get("tools_bin_dir")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);
        Config {
            default_threads,
            tools_bin_dir,
        }
    }

    pub fn from_file(path: &Path) -> Result<Config, SrrError> {
        let text = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&text)?;
        Ok(Config::from_value(&value))
    }
}

pub fn find_config() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let path = PathBuf::from(home).join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }
    None
}

/// Directory prepended to PATH, both in the script preamble and for the launched child: the
/// configured tools directory if any, else the directory holding the running executable.
pub fn install_dir(config: &Config) -> Result<PathBuf, SrrError> {
    if let Some(dir) = &config.tools_bin_dir {
        return Ok(dir.clone());
    }
    let exe = std::env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(PathBuf::from(".")),
    }
}
