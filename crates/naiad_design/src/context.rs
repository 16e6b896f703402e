//! Shared state threaded through an encode pass.

use crate::entities::Chip;
use naiad_smt::{Constraint, Declarations, Formula, LabelGen};

/// Mutable context for one encode pass: the chip, the soft-corners flag, the
/// variable declaration registry, and the label generator.
///
/// One context is created per [`Input::encode`](crate::Input::encode) call,
/// so labels and declarations restart from zero on every encode and repeated
/// encodes of the same input produce identical artifacts.
pub struct EncodeCtx<'a> {
    /// The chip every encoder measures against.
    pub chip: &'a Chip,
    /// Restrict channel corners to 90° turns.
    pub soft_corners: bool,
    /// Declared solver variables.
    pub decls: Declarations,
    /// Deterministic clause label generator.
    pub labels: LabelGen,
}

impl<'a> EncodeCtx<'a> {
    /// Creates a fresh context for one encode pass.
    pub fn new(chip: &'a Chip, soft_corners: bool) -> Self {
        Self {
            chip,
            soft_corners,
            decls: Declarations::new(),
            labels: LabelGen::new(),
        }
    }

    /// Labels and collects a clause, dropping folded tautologies.
    ///
    /// Clauses that folded to `false` are kept: their labels name the rule
    /// that makes the design infeasible.
    pub fn constrain(&mut self, out: &mut Vec<Constraint>, base: &str, formula: Formula) {
        if formula.as_const() == Some(true) {
            return;
        }
        out.push(Constraint::new(formula, self.labels.label(base)));
    }
}
