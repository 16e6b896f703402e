//! Naiad CLI — SMT-driven placement and routing for microfluidic chips.
//!
//! Provides `naiad solve` to run one design attempt: load a JSON design
//! file, compile it to constraints, hand them to the solver, and write the
//! concrete layout as JSON.

#![warn(missing_docs)]

mod solve;

use clap::{Parser, Subcommand};
use std::process;

/// Naiad — a constraint-driven chip placement and routing engine.
#[derive(Parser, Debug)]
#[command(name = "naiad", version, about = "Naiad chip placement and routing")]
pub struct Cli {
    /// Suppress progress output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a design file and write the resulting layout.
    Solve(solve::SolveArgs),
}

/// Exit code for a proven-infeasible design.
pub const EXIT_INFEASIBLE: i32 = 2;
/// Exit code for an indeterminate solver outcome.
pub const EXIT_INDETERMINATE: i32 = 3;

fn main() {
    let cli = Cli::parse();
    let code = match cli.command {
        Command::Solve(args) => solve::run(&args, cli.quiet),
    };
    process::exit(code);
}
