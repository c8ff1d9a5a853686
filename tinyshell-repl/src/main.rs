//! TinyShell REPL
//!
//! Reads one command per line from stdin and prints the dispatcher's reply.
//!
//! Built-ins handled before dispatch:
//! - `help [module]`: module listing, or one module's functions
//! - `exit` / `quit`: stop reading
//!
//! Configuration comes from `TINYSHELL_*` environment variables; logs go to
//! stderr, filtered by `RUST_LOG` (default `info`).

mod demo;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use tinyshell::{ShellConfig, TinyShell};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

enum Reply {
    Text(String),
    Quit,
    Nothing,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_line(shell: &TinyShell, line: &str) -> Reply {
    let line = line.trim();
    if line.is_empty() {
        return Reply::Nothing;
    }
    match line.split_once(' ') {
        None if line == "exit" || line == "quit" => Reply::Quit,
        None if line == "help" => Reply::Text(shell.get_help("")),
        Some(("help", module)) => Reply::Text(shell.get_help(module.trim())),
        _ => Reply::Text(shell.run_line_command(line)),
    }
}

fn main() -> ExitCode {
    init_logging();

    let config = ShellConfig::from_env();
    let prompt = config.prompt.clone();
    let mut shell = TinyShell::with_config(config);
    if let Err(e) = demo::register(&mut shell) {
        error!(error = %e, "failed to register demo modules");
        return ExitCode::FAILURE;
    }
    info!(modules = shell.modules().len(), "TinyShell v{} ready", env!("CARGO_PKG_VERSION"));

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        if write!(stdout, "{}", prompt).and_then(|_| stdout.flush()).is_err() {
            break;
        }

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                debug!("stdin closed");
                break;
            }
            Ok(_) => match handle_line(&shell, &line) {
                Reply::Text(text) => {
                    if let Err(e) = writeln!(stdout, "{}", text.trim_end()) {
                        error!(error = %e, "failed to write reply");
                        break;
                    }
                }
                Reply::Quit => break,
                Reply::Nothing => {}
            },
            Err(e) => {
                error!(error = %e, "failed to read input");
                return ExitCode::FAILURE;
            }
        }
    }

    info!("shutting down");
    ExitCode::SUCCESS
}
