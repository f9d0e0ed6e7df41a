// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::{
    errors::SrrError,
    job::{JobConfig, DEFAULT_THREADS},
    launcher::launch_script,
    platform::Platform,
    script::write_script,
    session::Session,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

// One line of the log area.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub kind: MessageKind,
    pub message: String,
}

/// The processor form: the identifier text box, the thread field, the output directory, and an
/// append-only log. Generate and Run never fail outright; every outcome ends up in the log.
pub struct App {
    pub identifier_text: String,
    pub thread_text: String,
    output_directory: Option<PathBuf>,
    platform: Platform,
    install_dir: PathBuf,
    session: Session,
    log: Vec<LogEntry>,
}

impl App {
    pub fn new(install_dir: PathBuf, platform: Platform) -> Self {
        App {
            identifier_text: String::new(),
            thread_text: String::from(DEFAULT_THREADS),
            output_directory: None,
            platform,
            install_dir,
            session: Session::default(),
            log: Vec::new(),
        }
    }

    // Picks up a session saved by an earlier Generate, including its output directory.
    pub fn with_session(mut self, session: Session) -> Self {
        if self.output_directory.is_none() {
            self.output_directory = session.output_directory.clone();
        }
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn output_directory(&self) -> Option<&Path> {
        self.output_directory.as_deref()
    }

    /// Sets (or, with None or an empty path, clears) the output directory. Returns the text of the
    /// directory label.
    pub fn select_output_directory(&mut self, dir: Option<PathBuf>) -> String {
        self.output_directory = dir.filter(|d| !d.as_os_str().is_empty());
        match &self.output_directory {
            Some(d) => format!("Selected Directory: {}", d.display()),
            None => String::from("No directory selected"),
        }
    }

    // Generate

    pub fn generate_script(&mut self) {
        self.clear_log();
        let job = match JobConfig::from_form(
            &self.identifier_text,
            &self.thread_text,
            self.output_directory.as_ref(),
            self.platform,
        ) {
            Ok(job) => job,
            Err(e) => {
                self.error_msg(e.to_string());
                return;
            }
        };
        match write_script(&job, &self.install_dir) {
            Ok(path) => {
                self.info_msg(format!("Success: Script generated at {}", path.display()));
                self.session.output_directory = Some(job.output_directory);
                self.session.script_path = Some(path);
            }
            Err(e) => {
                let cause = match e {
                    SrrError::Io(io_err) => io_err.to_string(),
                    other => other.to_string(),
                };
                warn!("Script write failed: {}", cause);
                self.error_msg(format!("Error: Failed to generate script: {}", cause));
            }
        }
    }

    // Run

    pub fn run_script(&mut self) {
        let script = match &self.session.script_path {
            Some(p) => p.clone(),
            None => {
                self.error_msg(SrrError::NoScript.to_string());
                return;
            }
        };
        // The script always lives in the output directory it was generated for.
        let work_dir = self
            .session
            .output_directory
            .clone()
            .or_else(|| script.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        match launch_script(&script, &work_dir, &self.install_dir, self.platform) {
            Ok(pid) => {
                info!("Script pid: {}", pid);
                self.info_msg(format!("Script execution started: {}", script.display()));
            }
            Err(e) => self.error_msg(e.to_string()),
        }
    }

    // Messages

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn has_errors(&self) -> bool {
        self.log.iter().any(|e| e.kind == MessageKind::Error)
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    pub fn info_msg(&mut self, msg: impl Into<String>) {
        self.log.push(LogEntry {
            kind: MessageKind::Info,
            message: msg.into(),
        });
    }

    pub fn error_msg(&mut self, msg: impl Into<String>) {
        self.log.push(LogEntry {
            kind: MessageKind::Error,
            message: msg.into(),
        });
    }
}
