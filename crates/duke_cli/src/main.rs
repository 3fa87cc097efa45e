//! Console entry point for the Duke task assistant.
//!
//! # Responsibility
//! - Resolve configuration, start logging, and open one task session.
//! - Own stdin/stdout and hand them to the console loop.

mod config;
mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use duke_core::{FileTaskStore, LogLevel, Session};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "duke", version, about = "A small task-tracking assistant")]
struct Cli {
    /// Config file (defaults to $DUKE_CONFIG_PATH, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Task file to load and save
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, global = true, value_parser = config::parse_log_level)]
    log_level: Option<LogLevel>,

    /// Absolute directory for log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Interactive session reading commands from stdin (default)
    Chat,
    /// Run a single command, e.g. `duke exec todo read book`
    Exec {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Print the resolved task file path
    Path,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = config::config_file(cli.config.as_deref());
    let mut settings = config::load_config(config_path.as_deref())?;
    if let Some(path) = cli.data_file {
        settings.storage.data_file = Some(path);
    }
    if let Some(level) = cli.log_level {
        settings.logging.level = Some(level);
    }
    if let Some(dir) = cli.log_dir {
        settings.logging.dir = Some(dir);
    }

    let data_path = config::data_file(&settings);
    if let Some(Cmd::Path) = cli.cmd {
        println!("{}", data_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    start_logging(&settings);
    info!(
        "event=cli_start module=cli status=ok core_version={}",
        duke_core::core_version()
    );

    let session = Session::open(FileTaskStore::new(data_path))
        .with_assistant_name(settings.assistant.name.clone());

    match cli.cmd {
        Some(Cmd::Exec { words }) => exec_once(session, &words.join(" ")),
        _ => chat(session),
    }
}

fn start_logging(settings: &config::Config) {
    let Some(dir) = config::log_dir(settings) else {
        eprintln!("warning: no log directory available; logging disabled");
        return;
    };
    let level = config::log_level(settings);
    if let Err(err) = duke_core::init_logging(level, &dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn chat(mut session: Session<FileTaskStore>) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    console::print_banner(&session, &mut stdout)?;
    stdout.flush()?;
    let said_bye = console::run_loop(&mut session, stdin.lock(), &mut stdout)?;
    info!("event=cli_exit module=cli status=ok said_bye={said_bye}");
    Ok(ExitCode::SUCCESS)
}

fn exec_once(mut session: Session<FileTaskStore>, line: &str) -> Result<ExitCode> {
    let mut stderr = io::stderr().lock();
    if let Some(notice) = session.loading_notice() {
        // A first run has no file yet; that is not worth a notice here.
        if session.store().path().exists() {
            writeln!(stderr, "{notice}")?;
        }
    }
    console::print_skipped(&session, &mut stderr)?;

    let mut stdout = io::stdout().lock();

    let reply = session.respond(line);
    writeln!(stdout, "{}", reply.text)?;
    Ok(if reply.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
