mod command;
mod error;
mod session;

use command::Command;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses and runs a single line of input, printing its output or reporting its error. Returns
/// false if the line failed.
fn run_line(line: &str, session: &mut Session) -> bool {
    let command = match Command::parse(line) {
        Ok(command) => command,
        Err(err) => {
            Error::from(err).report_to_stderr(line);
            return false;
        },
    };

    match session.run(&command) {
        Ok(output) => {
            output.iter().for_each(|line| println!("{}", line));
            true
        },
        Err(err) => {
            err.report_to_stderr(command.source().unwrap_or(line));
            false
        },
    }
}

/// Runs every line of a script, skipping blank lines and `#` comments. Every line is run even if
/// an earlier one fails.
fn run_script(input: &str) -> ExitCode {
    let mut session = Session::new();
    let mut failed = 0;

    for line in input.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !run_line(line, &mut session) {
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        info!(failed, "script finished with errors");
        ExitCode::FAILURE
    }
}

/// Runs the interactive prompt until end of input or an interrupt.
fn run_interactive() -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;
    let mut session = Session::new();
    println!("type `:help` for a list of commands");

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;
        run_line(&input, &mut session);
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    if let Some(filename) = args.next() {
        // run source file
        match fs::read_to_string(&filename) {
            Ok(input) => run_script(&input),
            Err(err) => {
                eprintln!("error: could not read `{}`: {}", filename, err);
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("error: could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }
        run_script(&input)
    } else {
        // run the repl / interactive mode
        match run_interactive() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            },
        }
    }
}
