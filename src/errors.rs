// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

#[derive(Debug)]
pub enum SrrError {
    Io(io::Error),
    Json(serde_json::Error),
    // Rejected form input; the message is shown as-is.
    Input(String),
    Directory(String),
    NoScript,
    Spawn(io::Error),
}

// These allow conversion to SrrError, required for '?' to work.

impl From<io::Error> for SrrError {
    fn from(e: io::Error) -> Self {
        SrrError::Io(e)
    }
}

impl From<serde_json::Error> for SrrError {
    fn from(e: serde_json::Error) -> Self {
        SrrError::Json(e)
    }
}

impl fmt::Display for SrrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SrrError::Io(e) => write!(f, "I/O error: {}", e),
            SrrError::Json(e) => write!(f, "JSON error: {}", e),
            SrrError::Input(msg) => write!(f, "Input Error: {}", msg),
            SrrError::Directory(msg) => write!(f, "Directory Error: {}", msg),
            SrrError::NoScript => write!(f, "Error: No script has been generated yet."),
            SrrError::Spawn(e) => write!(f, "Error: Failed to run script: {}", e),
        }
    }
}

impl std::error::Error for SrrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SrrError::Io(e) | SrrError::Spawn(e) => Some(e),
            SrrError::Json(e) => Some(e),
            _ => None,
        }
    }
}
