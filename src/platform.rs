// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use crate::script::{PosixShell, ScriptDialect, WindowsBatch};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// The platform this binary was built for. Script syntax follows from this alone.
    pub fn host() -> Platform {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    pub fn dialect(self) -> &'static dyn ScriptDialect {
        match self {
            Platform::Posix => &PosixShell,
            Platform::Windows => &WindowsBatch,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Platform::Posix => "posix",
            Platform::Windows => "windows",
        };
        write!(f, "{}", s)
    }
}
