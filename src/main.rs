//! argline entry point: read a request on stdin, print a report on stdout.

use argline::config::Config;
use argline::extraction::extract;
use argline::input::Request;
use argline::log;
use argline::output::{format_error, format_report};

use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{}", format_error(message));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, String> {
    let mut input_str = String::new();
    io::stdin()
        .read_to_string(&mut input_str)
        .map_err(|e| format!("failed to read stdin: {e}"))?;

    let request = Request::parse(&input_str).map_err(|e| e.to_string())?;

    let cwd = request.cwd.as_deref().map(Path::new);
    let config = Config::load(cwd).map_err(|e| format!("config error: {e}"))?;

    // Invalid patterns stop here, before any extraction.
    let compiled = config
        .compile()
        .map_err(|e| format!("config error: {e}"))?;

    let (dispatch, open_error) = match log::dispatch(&compiled.raw.log) {
        Ok(dispatch) => (dispatch, None),
        Err(e) => (log::stderr_dispatch(&compiled.raw.log), Some(e)),
    };

    let report = tracing::dispatcher::with_default(&dispatch, || {
        if let Some(e) = open_error {
            tracing::warn!("cannot open log file, using stderr: {e}");
        }
        extract(&request.line, &compiled)
    });
    format_report(&report).map_err(|e| format!("failed to format report: {e}"))
}
