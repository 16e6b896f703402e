//! The `naiad solve` subcommand.

use crate::{EXIT_INDETERMINATE, EXIT_INFEASIBLE};
use clap::Parser;
use naiad_design::{design, DesignError, Output};
use naiad_smt::Z3Process;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for `naiad solve`.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to the JSON design file.
    pub design: PathBuf,

    /// Where to write the layout JSON (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Solver binary to invoke.
    #[arg(long, default_value = "z3")]
    pub solver: String,

    /// Soft solver timeout in seconds; expiry reports an indeterminate solve.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Restrict channel corners to 90° turns, overriding the design file.
    #[arg(long)]
    pub soft_corners: bool,
}

/// Runs one design attempt; returns the process exit code.
pub fn run(args: &SolveArgs, quiet: bool) -> i32 {
    let mut input = match naiad_config::load_design(&args.design) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };
    if args.soft_corners {
        input.soft_corners = true;
    }

    let mut solver = Z3Process::with_binary(&args.solver);
    if let Some(secs) = args.timeout {
        solver = solver.timeout(Duration::from_secs(secs));
    }

    match design(&input, &mut solver) {
        Ok(output) => {
            if !quiet {
                report(&output);
            }
            if let Err(err) = write_output(args, &output) {
                eprintln!("error: {err}");
                return 1;
            }
            if output.success {
                0
            } else {
                EXIT_INFEASIBLE
            }
        }
        Err(DesignError::Indeterminate) => {
            eprintln!("error: the solver gave up before reaching a verdict");
            EXIT_INDETERMINATE
        }
        Err(err) => {
            eprintln!("error: {err}");
            1
        }
    }
}

fn report(output: &Output) {
    let millis = output.timing.as_millis();
    if output.success {
        eprintln!(
            "solved: {} modules, {} channels, {} pins in {millis} ms",
            output.modules.len(),
            output.channels.len(),
            output.pins.len()
        );
    } else {
        eprintln!("infeasible after {millis} ms");
    }
}

fn write_output(args: &SolveArgs, output: &Output) -> Result<(), std::io::Error> {
    let json = serde_json::to_string_pretty(output).expect("output serializes");
    match &args.output {
        Some(path) => std::fs::write(path, json),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_design_file_is_an_input_error() {
        let args = SolveArgs {
            design: PathBuf::from("/nonexistent/design.json"),
            output: None,
            solver: "z3".to_string(),
            timeout: None,
            soft_corners: false,
        };
        assert_eq!(run(&args, true), 1);
    }

    #[test]
    fn malformed_design_is_an_input_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let args = SolveArgs {
            design: file.path().to_path_buf(),
            output: None,
            solver: "z3".to_string(),
            timeout: None,
            soft_corners: false,
        };
        assert_eq!(run(&args, true), 1);
    }
}
