//! Circular fixation pins tied to modules.

use crate::context::EncodeCtx;
use crate::ids::{ModuleId, PinId};
use naiad_geom::Rect;
use naiad_smt::{EvalError, Model, Term};
use serde::{Deserialize, Serialize};

/// A pin as specified by the design input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSpec {
    /// The owning module's index in the input.
    pub module: usize,
    /// Pin radius.
    pub radius: i64,
}

/// A pin's symbolic form: a free center position on its module's clamp band.
#[derive(Debug, Clone)]
pub struct EncodedPin {
    /// The pin id (variable names embed it).
    pub id: PinId,
    /// The owning module.
    pub module: ModuleId,
    /// Pin radius.
    pub radius: i64,
    /// Center x.
    pub x: Term,
    /// Center y.
    pub y: Term,
}

impl EncodedPin {
    /// Allocates the pin's position variables.
    pub fn encode(id: PinId, spec: &PinSpec, ctx: &mut EncodeCtx<'_>) -> Self {
        Self {
            id,
            module: ModuleId::from_raw(spec.module as u32),
            radius: spec.radius,
            x: ctx.decls.int_var(format!("p{id}_x")),
            y: ctx.decls.int_var(format!("p{id}_y")),
        }
    }

    /// The pin's exclusion square: the circle approximated by its bounding
    /// square. Keep-out distances are measured from this square.
    pub fn exclusion_rect(&self) -> Rect {
        Rect::around_point(&self.x, &self.y, self.radius)
    }
}

/// A pin's concrete form after solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinResult {
    /// The pin id.
    pub id: PinId,
    /// The owning module.
    pub module: ModuleId,
    /// Pin radius.
    pub radius: i64,
    /// Center x.
    pub x: i64,
    /// Center y.
    pub y: i64,
}

impl PinResult {
    /// Extracts the concrete pin from a satisfying assignment.
    pub fn resolve(encoded: &EncodedPin, model: &Model) -> Result<Self, EvalError> {
        Ok(Self {
            id: encoded.id,
            module: encoded.module,
            radius: encoded.radius,
            x: encoded.x.eval(model)?,
            y: encoded.y.eval(model)?,
        })
    }
}
