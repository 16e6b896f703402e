//! The external solver boundary.
//!
//! The engine consumes any SMT solver that accepts integer arithmetic,
//! booleans, and fixed-width bit-vectors, and answers `sat` with a model,
//! `unsat`, or `unknown`. [`Z3Process`] drives a `z3` subprocess over
//! SMT-LIB 2; [`ScriptedSolver`] returns canned outcomes for tests of the
//! solve driver.

use crate::constraint::{Constraint, VarDecl};
use crate::model::Model;
use crate::smtlib;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::Duration;

/// The three solver outcomes.
///
/// `Unsat` means the design is well-formed but infeasible; `Unknown` (or a
/// timeout) is an indeterminate result that must not be conflated with
/// either feasibility or infeasibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// Satisfiable, with a model assigning every declared variable.
    Sat(Model),
    /// Proven infeasible.
    Unsat,
    /// The solver gave up or timed out.
    Unknown,
}

/// Errors at the solver infrastructure level, distinct from all three
/// [`SolveResult`] outcomes.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// The solver binary could not be started.
    #[error("failed to launch solver '{binary}': {source}")]
    Launch {
        /// The binary that was invoked.
        binary: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Talking to the running solver failed.
    #[error("solver I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The solver produced output the protocol layer could not interpret.
    #[error("solver protocol error: {0}")]
    Protocol(String),
}

/// A black-box satisfiability engine.
pub trait Solver {
    /// Solves the given problem once, to completion or failure.
    fn solve(
        &mut self,
        decls: &[VarDecl],
        constraints: &[Constraint],
    ) -> Result<SolveResult, SolverError>;
}

/// Drives a `z3` executable over stdin/stdout in SMT-LIB 2 mode.
#[derive(Debug, Clone)]
pub struct Z3Process {
    binary: PathBuf,
    timeout: Option<Duration>,
}

impl Z3Process {
    /// Uses `z3` from `PATH`.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("z3"),
            timeout: None,
        }
    }

    /// Uses the given solver binary.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            timeout: None,
        }
    }

    /// Sets a soft solve timeout; expiry surfaces as [`SolveResult::Unknown`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for Z3Process {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver for Z3Process {
    fn solve(
        &mut self,
        decls: &[VarDecl],
        constraints: &[Constraint],
    ) -> Result<SolveResult, SolverError> {
        let script = smtlib::script(decls, constraints);

        let mut cmd = Command::new(&self.binary);
        cmd.arg("-in").arg("-smt2");
        if let Some(timeout) = self.timeout {
            cmd.arg(format!("-t:{}", timeout.as_millis()));
        }
        let mut child = cmd
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| SolverError::Launch {
                binary: self.binary.display().to_string(),
                source,
            })?;

        child
            .stdin
            .take()
            .expect("stdin was piped")
            .write_all(script.as_bytes())?;
        let output = child.wait_with_output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        smtlib::parse_output(&stdout, decls)
    }
}

/// A solver double that returns pre-programmed outcomes, for tests of the
/// solve driver.
#[derive(Debug, Default)]
pub struct ScriptedSolver {
    outcomes: Vec<SolveResult>,
    /// Problems seen, most recent last.
    pub calls: Vec<(usize, usize)>,
}

impl ScriptedSolver {
    /// Creates a double that answers with the given outcome once.
    pub fn returning(outcome: SolveResult) -> Self {
        Self {
            outcomes: vec![outcome],
            calls: Vec::new(),
        }
    }
}

impl Solver for ScriptedSolver {
    fn solve(
        &mut self,
        decls: &[VarDecl],
        constraints: &[Constraint],
    ) -> Result<SolveResult, SolverError> {
        self.calls.push((decls.len(), constraints.len()));
        if self.outcomes.is_empty() {
            return Err(SolverError::Protocol(
                "scripted solver exhausted".to_string(),
            ));
        }
        Ok(self.outcomes.remove(0))
    }
}
