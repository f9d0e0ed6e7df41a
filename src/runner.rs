// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use crate::app::{App, MessageKind};
use crate::config::{find_config, install_dir, Config};
use crate::errors::SrrError;
use crate::platform::Platform;
use crate::session::{default_session_path, Session};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Session file remembering the last generated script
    #[arg(short, long, global = true)]
    session: Option<PathBuf>,

    /// Config file (default: ~/.srrprocessorconfig, then ./.srrprocessorconfig)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Write process_srr.sh (or .cmd) into the output directory
    Generate(FormArgs),
    /// Launch the last generated script and return immediately
    Run,
    /// Generate, then run
    Process(FormArgs),
}

#[derive(Debug, Args)]
struct FormArgs {
    /// SRR accession codes
    accessions: Vec<String>,

    /// File with one accession per line ("-" reads stdin)
    #[arg(short = 'f', long = "accession-file")]
    accession_file: Option<String>,

    /// Number of threads for samtools (default: 4, or default_threads from the config)
    #[arg(short, long)]
    threads: Option<String>,

    /// Output directory (must exist)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn read_accession_text(fname: &str) -> Result<String, io::Error> {
    if fname == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(fname)
    }
}

fn load_config(explicit: Option<&Path>) -> Config {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };
    match path {
        Some(path) => match Config::from_file(&path) {
            Ok(cfg) => {
                info!("Using config {}", path.display());
                cfg
            }
            Err(e) => {
                warn!("Error reading {}: {}", path.display(), e);
                Config::default()
            }
        },
        None => Config::default(),
    }
}

// Fills the form the way a user would: text box, thread field, directory picker.
fn fill_form(app: &mut App, form: FormArgs) -> Result<(), SrrError> {
    let mut text = form.accessions.join("\n");
    if let Some(fname) = &form.accession_file {
        let from_file = read_accession_text(fname)?;
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(&from_file);
    }
    app.identifier_text = text;
    if let Some(threads) = form.threads {
        app.thread_text = threads;
    }
    if form.output_dir.is_some() {
        let label = app.select_output_directory(form.output_dir);
        info!("{}", label);
    }
    Ok(())
}

fn print_log(app: &App) {
    for entry in app.log() {
        match entry.kind {
            MessageKind::Info => println!("{}", entry.message),
            MessageKind::Error => eprintln!("{}", entry.message),
        }
    }
}

// Exits with failure iff the invocation logged an error.
pub fn run() -> Result<ExitCode, SrrError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let session_path = cli.session.unwrap_or_else(default_session_path);
    let platform = Platform::host();
    info!("Platform: {}", platform);

    let mut app = App::new(install_dir(&config)?, platform);
    app.thread_text = config.default_threads.clone();

    let failed = match cli.command {
        Cmd::Generate(form) => {
            fill_form(&mut app, form)?;
            app.generate_script();
            print_log(&app);
            if app.session().has_script() {
                app.session().save(&session_path)?;
            }
            app.has_errors()
        }
        Cmd::Run => {
            let mut app = app.with_session(Session::load(&session_path)?);
            app.run_script();
            print_log(&app);
            app.has_errors()
        }
        Cmd::Process(form) => {
            fill_form(&mut app, form)?;
            app.generate_script();
            if app.session().has_script() {
                app.session().save(&session_path)?;
                app.run_script();
            }
            print_log(&app);
            app.has_errors()
        }
    };

    Ok(ExitCode::from(exit_status(failed)))
}

fn exit_status(failed: bool) -> u8 {
    if failed {
        1
    } else {
        0
    }
}
