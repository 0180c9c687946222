//! `sapling` command-line runner and REPL

use std::io::Stdout;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sapling::{Session, SessionConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const PROMPT: &str = ">> ";

/// Run a Sapling script, or start an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "sapling", version, about)]
struct Cli {
    /// Script to run
    script: Option<PathBuf>,

    /// Start the interactive prompt (after running SCRIPT, if given)
    #[arg(short, long)]
    prompt: bool,

    /// Echo each parsed statement in prefix form before running it
    #[arg(long)]
    ast: bool,

    /// Dump the token stream as JSON lines before parsing
    #[arg(long)]
    tokens: bool,

    /// Report every syntax error in SCRIPT without running it
    #[arg(long, requires = "script")]
    check: bool,

    /// Log pipeline phases to stderr (same as RUST_LOG=sapling=debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_echo_ast(self.ast)
            .with_dump_tokens(self.tokens)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let (true, Some(script)) = (cli.check, &cli.script) {
        return check_file(script);
    }

    let mut session = Session::new(cli.session_config());

    if let Some(script) = &cli.script {
        let failure = run_file(&mut session, script)?;
        if let Some(code) = script_exit_status(cli.prompt, failure) {
            return Ok(ExitCode::from(code));
        }
    }

    run_prompt(&mut session)?;
    Ok(ExitCode::SUCCESS)
}

/// Install a stderr subscriber filtered by `RUST_LOG`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sapling=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true),
        )
        .with(filter)
        .init();
}

fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script `{}`", path.display()))
}

/// Run a script, returning the failure exit status if it did not succeed.
fn run_file(session: &mut Session<Stdout>, path: &Path) -> Result<Option<i32>> {
    let source = read_script(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "running script");

    match session.run(&source) {
        Ok(()) => Ok(None),
        Err(err) => {
            eprintln!("{}", err);
            Ok(Some(err.exit_code()))
        }
    }
}

fn check_file(path: &Path) -> Result<ExitCode> {
    let source = read_script(path)?;
    let errors = sapling::check(&source);
    for err in &errors {
        eprintln!("{}", err);
    }

    Ok(match errors.first() {
        Some(err) => exit_code(err.exit_code()),
        None => ExitCode::SUCCESS,
    })
}

/// Read-eval-print loop. Each line runs on its own; a failing line is
/// reported and the session's bindings carry on to the next one.
fn run_prompt(session: &mut Session<Stdout>) -> Result<()> {
    let mut editor = DefaultEditor::new().context("failed to start line editor")?;

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                if let Err(err) = editor.add_history_entry(line.as_str()) {
                    tracing::warn!(error = %err, "failed to record history entry");
                }
                if let Err(err) = session.run(&line) {
                    eprintln!("{}", err);
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("failed to read input"),
        }
    }

    Ok(())
}

/// Exit status once SCRIPT has run, or `None` to carry on into the prompt.
///
/// With `--prompt` a failing script has already been reported and the
/// prompt starts with whatever bindings the script made.
fn script_exit_status(prompt: bool, failure: Option<i32>) -> Option<u8> {
    if prompt {
        return None;
    }
    Some(failure.map_or(0, exit_status))
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(exit_status(code))
}

fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
