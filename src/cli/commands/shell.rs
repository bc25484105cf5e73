//! Line-oriented front end: every line read from the input is parsed as a
//! command and dispatched against the same store.

use crate::cli::parser::{Commands, ShellLine};
use crate::config::{Config, OutputFormat};
use crate::errors::{AppError, AppResult};
use crate::store::Store;
use crate::ui::messages::{error, info};
use crate::utils::args::split_line;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;

/// Outcome of one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Parse and run one line. Errors are returned to the caller.
pub fn run_line(
    line: &str,
    cfg: &Config,
    config_path: &Path,
    store: &mut Store,
) -> AppResult<LineOutcome> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(LineOutcome::Continue);
    }
    if matches!(trimmed, "exit" | "quit") {
        return Ok(LineOutcome::Exit);
    }

    let args = split_line(trimmed)?;
    let parsed = match ShellLine::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) if e.use_stderr() => return Err(AppError::Shell(e.to_string())),
        Err(e) => {
            // --help / --version output
            print!("{e}");
            return Ok(LineOutcome::Continue);
        }
    };

    if matches!(parsed.command, Commands::Shell) {
        return Err(AppError::Shell("already in a shell session".into()));
    }

    let mut line_cfg = cfg.clone();
    if parsed.json {
        line_cfg.output = OutputFormat::Json;
    }

    crate::dispatch(&parsed.command, &line_cfg, config_path, store)?;
    Ok(LineOutcome::Continue)
}

/// Read commands until end of input or `exit`. A failing command is
/// reported and the session goes on. Returns the number of failed lines.
/// `interactive` turns on the banner and the prompt.
pub fn run<R: BufRead>(
    input: R,
    interactive: bool,
    cfg: &Config,
    config_path: &Path,
    store: &mut Store,
) -> AppResult<usize> {
    let mut failures = 0;

    if interactive {
        info("rVolunteer shell. Type 'exit' to quit.");
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            print!("rvolunteer> ");
            io::stdout().flush().ok();
        }

        let Some(line) = lines.next() else {
            break;
        };

        match run_line(&line?, cfg, config_path, store) {
            Ok(LineOutcome::Continue) => {}
            Ok(LineOutcome::Exit) => break,
            Err(e) => {
                failures += 1;
                error(e);
            }
        }
    }

    Ok(failures)
}

pub fn handle(cfg: &Config, config_path: &Path, store: &mut Store) -> AppResult<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let failures = run(stdin.lock(), interactive, cfg, config_path, store)?;
    if failures > 0 {
        info(format!("Session ended with {failures} failed command(s)."));
    }
    Ok(())
}
