// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::path::{Path, PathBuf};

// Fresh, empty directory under the system temp dir, unique per test name and process.
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("srr-processor-it-{}-{}", name, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    std::fs::create_dir_all(&dir).expect("creating scratch dir");
    dir
}

#[allow(dead_code)]
pub fn command_lines(script: &Path) -> Vec<String> {
    std::fs::read_to_string(script)
        .expect("reading script")
        .lines()
        .filter(|l| l.starts_with("sam-dump") || l.starts_with("samtools"))
        .map(String::from)
        .collect()
}

#[allow(dead_code)]
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("listing dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
