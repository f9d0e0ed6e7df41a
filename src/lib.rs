pub mod app;
pub mod config;
pub mod errors;
pub mod job;
pub mod launcher;
pub mod platform;
mod runner;
pub mod script;
pub mod session;

use std::process::ExitCode;

use crate::errors::SrrError;

pub fn run() -> Result<ExitCode, SrrError> {
    runner::run()
}
