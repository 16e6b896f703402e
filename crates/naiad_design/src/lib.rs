//! Design entities, constraint encoders, and the solve pipeline for the
//! Naiad placement-and-routing engine.
//!
//! This crate takes a placement-and-routing [`Input`] (chip, modules,
//! channels, pins, exclusion zones), compiles it into labeled arithmetic/
//! boolean constraints over symbolic geometry, hands the clause set to an
//! external [`Solver`](naiad_smt::Solver), and reconstructs the concrete
//! layout from a satisfying model.
//!
//! # Pipeline
//!
//! 1. **Encode** — [`Input::encode`] turns every entity into symbolic
//!    variables and runs every relationship encoder over its cross-product
//! 2. **Solve** — the clause set goes to the solver once, to completion
//! 3. **Extract** — [`Output`] rebuilds concrete geometry from the model
//!
//! # Usage
//!
//! ```ignore
//! use naiad_design::{design, Input};
//! use naiad_smt::Z3Process;
//!
//! let output = design(&input, &mut Z3Process::new())?;
//! if output.success {
//!     render(&output);
//! }
//! ```

#![warn(missing_docs)]

mod context;
pub mod encoders;
pub mod entities;
pub mod error;
pub mod ids;
mod input;
mod output;
pub mod units;

pub use context::EncodeCtx;
pub use entities::{
    ChannelResult, ChannelSpec, Chip, Clamp, DynamicExclusionSpec, EncodedChannel,
    EncodedExclusion, EncodedModule, EncodedPin, ExclusionKind, ExclusionResult, ModuleResult,
    ModuleSpec, Orientation, PinResult, PinSpec, Placement, PortGrid, PortRef, SegmentResult,
    StaticExclusionSpec,
};
pub use error::{DesignError, EncodeError};
pub use ids::{ChannelId, ExclusionId, ModuleId, PinId};
pub use input::{EncodedInput, Input};
pub use output::Output;

use naiad_smt::{SolveResult, Solver};
use std::time::Instant;

/// Runs one complete design attempt: encode, solve once, extract.
///
/// `unsat` is not an error — it returns an [`Output`] with
/// `success: false` and the attempt timing. `unknown` and solver
/// infrastructure failures surface as distinct [`DesignError`] variants.
/// Timing and success bookkeeping happen here and nowhere else.
pub fn design(input: &Input, solver: &mut dyn Solver) -> Result<Output, DesignError> {
    let start = Instant::now();
    let encoded = input.encode()?;
    let outcome = solver.solve(encoded.declarations(), encoded.constraints())?;
    let timing = start.elapsed();
    match outcome {
        SolveResult::Sat(model) => Ok(Output::resolved(&encoded, &model, timing)?),
        SolveResult::Unsat => Ok(Output::infeasible(encoded.chip.clone(), timing)),
        SolveResult::Unknown => Err(DesignError::Indeterminate),
    }
}
