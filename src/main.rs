// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::process::ExitCode;

use srr_processor::errors::SrrError;

fn main() -> Result<ExitCode, SrrError> {
    srr_processor::run()
}
