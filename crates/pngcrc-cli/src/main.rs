use clap::Parser;
use pngcrc_core::logging;
use std::io;
use std::process::ExitCode;

mod cli;

use crate::cli::{Cli, Outcome};

fn main() -> ExitCode {
    let mut out = io::stdout().lock();

    // Parse before logging so a bad invocation touches nothing on disk.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return ExitCode::from(cli::report_parse_error(&err, &mut out)),
    };

    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let result = cli.run(&mut input, &mut out);
    match &result {
        Ok(Outcome::Generated(generated)) => {
            tracing::debug!(sidecar = %generated.sidecar.display(), "done");
        }
        Ok(Outcome::Declined) => {}
        Err(err) => {
            tracing::error!("{:#}", err);
            cli::report_error(err, &mut out);
        }
    }
    ExitCode::from(cli::exit_code(&result))
}
