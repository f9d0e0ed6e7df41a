// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::errors::SrrError;
use crate::job::JobConfig;

/// Syntax of a generated script. There is one implementation per [`crate::platform::Platform`];
/// nothing else decides what the script looks like.
pub trait ScriptDialect {
    fn script_file_name(&self) -> &'static str;

    /// Lines before the first command. Prepends `install_dir` to `PATH` so that co-located
    /// `sam-dump` and `samtools` binaries win over anything installed globally.
    fn preamble(&self, install_dir: &Path) -> String;

    /// `<outdir>/<id>.sorted.bam`, spelled with this dialect's separator.
    fn sorted_bam_path(&self, output_directory: &Path, identifier: &str) -> String;

    /// The dump-and-sort line, then the index line.
    fn command_pair(&self, identifier: &str, threads: u32, sorted_bam: &str) -> [String; 2];

    /// Whether the file needs its execute bits set after writing.
    fn needs_exec_bits(&self) -> bool;

    /// Program and leading arguments that execute a script of this dialect; the script path is
    /// appended.
    fn interpreter(&self) -> (&'static str, &'static [&'static str]);
}

pub struct PosixShell;

pub struct WindowsBatch;

fn join_with(dir: &Path, sep: char, file_name: &str) -> String {
    let dir = dir.display().to_string();
    let trimmed = dir.trim_end_matches(['/', '\\']);
    format!("{}{}{}", trimmed, sep, file_name)
}

impl ScriptDialect for PosixShell {
    fn script_file_name(&self) -> &'static str {
        "process_srr.sh"
    }

    fn preamble(&self, install_dir: &Path) -> String {
        format!(
            "#!/bin/bash\n\n# Add app directory to PATH\nexport PATH=\"{}:$PATH\"\n\n",
            install_dir.display()
        )
    }

    fn sorted_bam_path(&self, output_directory: &Path, identifier: &str) -> String {
        join_with(output_directory, '/', &format!("{}.sorted.bam", identifier))
    }

    fn command_pair(&self, identifier: &str, threads: u32, sorted_bam: &str) -> [String; 2] {
        [
            format!(
                "sam-dump {} | samtools sort --no-PG -@{} -o \"{}\"",
                identifier, threads, sorted_bam
            ),
            format!("samtools index -@{} \"{}\"", threads, sorted_bam),
        ]
    }

    fn needs_exec_bits(&self) -> bool {
        true
    }

    fn interpreter(&self) -> (&'static str, &'static [&'static str]) {
        ("bash", &[])
    }
}

impl ScriptDialect for WindowsBatch {
    fn script_file_name(&self) -> &'static str {
        "process_srr.cmd"
    }

    fn preamble(&self, install_dir: &Path) -> String {
        format!(
            "@echo off\nREM Add app directory to PATH\nset \"PATH={};%PATH%\"\n\n",
            install_dir.display()
        )
    }

    fn sorted_bam_path(&self, output_directory: &Path, identifier: &str) -> String {
        join_with(output_directory, '\\', &format!("{}.sorted.bam", identifier))
    }

    fn command_pair(&self, identifier: &str, threads: u32, sorted_bam: &str) -> [String; 2] {
        [
            format!(
                "sam-dump.exe {} | samtools.exe sort --no-PG -@{} -o \"{}\"",
                identifier, threads, sorted_bam
            ),
            format!("samtools.exe index -@{} \"{}\"", threads, sorted_bam),
        ]
    }

    fn needs_exec_bits(&self) -> bool {
        false
    }

    fn interpreter(&self) -> (&'static str, &'static [&'static str]) {
        ("cmd", &["/c"])
    }
}

pub fn script_path(job: &JobConfig) -> PathBuf {
    job.output_directory
        .join(job.platform.dialect().script_file_name())
}

pub fn render_script(job: &JobConfig, install_dir: &Path) -> String {
    let dialect = job.platform.dialect();
    let mut text = dialect.preamble(install_dir);
    for id in &job.identifiers {
        let bam = dialect.sorted_bam_path(&job.output_directory, id);
        debug!("{} -> {}", id, bam);
        for line in dialect.command_pair(id, job.thread_count, &bam) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// Writes (or overwrites) the script for `job` and returns its path. A failed write may leave a
/// partial file behind.
pub fn write_script(job: &JobConfig, install_dir: &Path) -> Result<PathBuf, SrrError> {
    let path = script_path(job);
    let text = render_script(job, install_dir);
    let mut out = BufWriter::new(File::create(&path)?);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    drop(out);

    if job.platform.dialect().needs_exec_bits() {
        set_exec_bits(&path)?;
    }
    info!(
        "Wrote {} commands for {} accession(s) to {}",
        2 * job.identifiers.len(),
        job.identifiers.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(unix)]
fn set_exec_bits(path: &Path) -> Result<(), SrrError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_exec_bits(_path: &Path) -> Result<(), SrrError> {
    Ok(())
}
