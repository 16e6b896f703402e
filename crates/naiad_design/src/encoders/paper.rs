//! Manufacturability constraints.
//!
//! These encode the fabrication process rules: pitch and module dimensions
//! on their manufacturing grids, and the chip in one of the standard
//! formats. All inputs are concrete, so every clause folds to a constant —
//! a violated rule surfaces as a labeled `false` clause that makes the
//! design infeasible with a nameable cause.

use crate::context::EncodeCtx;
use crate::entities::{Chip, EncodedModule};
use crate::units::{CHIP_SIZE_BANDS, MODULE_DIM_UNIT, PITCH_UNIT};
use naiad_smt::{Constraint, Formula};

/// Module pitch and dimensions must be positive multiples of their
/// manufacturing units.
pub fn encode_module(ctx: &mut EncodeCtx<'_>, module: &EncodedModule) -> Vec<Constraint> {
    let mut out = Vec::new();
    let id = module.id;
    let on_grid = |v: i64, unit: i64| v > 0 && v % unit == 0;
    ctx.constrain(
        &mut out,
        &format!("m{id}_paper_pitch"),
        Formula::Const(on_grid(module.pitch, PITCH_UNIT)),
    );
    ctx.constrain(
        &mut out,
        &format!("m{id}_paper_width"),
        Formula::Const(on_grid(module.width, MODULE_DIM_UNIT)),
    );
    ctx.constrain(
        &mut out,
        &format!("m{id}_paper_height"),
        Formula::Const(on_grid(module.height, MODULE_DIM_UNIT)),
    );
    out
}

/// Chip dimensions must fall into one of the standard size bands.
pub fn encode_chip(ctx: &mut EncodeCtx<'_>, chip: &Chip) -> Vec<Constraint> {
    let mut out = Vec::new();
    let fits = CHIP_SIZE_BANDS.iter().any(|((w_lo, w_hi), (h_lo, h_hi))| {
        (*w_lo..=*w_hi).contains(&chip.width) && (*h_lo..=*h_hi).contains(&chip.height)
    });
    ctx.constrain(&mut out, "chip_paper_size", Formula::Const(fits));
    out
}
